use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info, warn};

use crate::engine::gateway::PartyApi;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::state::AppState;
use crate::view::render;

/// Owns the application state and the gateway. Commands are handled one at
/// a time in arrival order; every handled command ends with a publish, so
/// the UI always holds a page rendered from the last committed snapshot.
pub struct Engine {
    rx: UnboundedReceiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    state: AppState,
    gateway: Box<dyn PartyApi>,
}

impl Engine {
    pub fn new(
        rx: UnboundedReceiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        gateway: Box<dyn PartyApi>,
    ) -> Self {
        Self {
            rx,
            tx,
            state: AppState::default(),
            gateway,
        }
    }

    pub async fn run(&mut self) {
        self.initial_load().await;

        while let Some(cmd) = self.rx.recv().await {
            self.handle(cmd).await;
        }
    }

    /// Fetches all three collections once at startup. The first page goes
    /// out even if every fetch failed.
    async fn initial_load(&mut self) {
        info!("loading parties, rsvps and guests");

        self.refresh_parties().await;

        match self.gateway.list_rsvps().await {
            Ok(rsvps) => self.state.replace_rsvps(rsvps),
            Err(err) => error!(%err, "failed to fetch rsvps"),
        }

        match self.gateway.list_guests().await {
            Ok(guests) => self.state.replace_guests(guests),
            Err(err) => error!(%err, "failed to fetch guests"),
        }

        self.publish();
    }

    async fn handle(&mut self, cmd: EngineCommand) {
        match cmd {
            EngineCommand::SelectParty(id) => {
                debug!(id, "selecting party");
                match self.gateway.get_party(id).await {
                    Ok(party) => self.state.select_party(party),
                    // Selection stays where it was.
                    Err(err) => error!(%err, id, "failed to fetch party"),
                }
                self.publish();
            }

            EngineCommand::RemoveParty(id) => {
                debug!(id, "removing party");
                match self.gateway.delete_party(id).await {
                    Ok(()) => {
                        // The selection clears before the list refresh lands,
                        // so one page shows the prompt next to the stale list.
                        self.state.clear_selection();
                        self.publish();
                        self.refresh_parties().await;
                    }
                    Err(err) => error!(%err, id, "failed to delete party"),
                }
                self.publish();
            }

            EngineCommand::SubmitNewParty(input) => {
                debug!("submitting new party");
                match input.into_draft() {
                    Ok(draft) => {
                        if let Err(err) = self.gateway.create_party(&draft).await {
                            error!(%err, "failed to create party");
                        }
                        // The list refreshes whether or not the create landed.
                        self.refresh_parties().await;
                    }
                    Err(err) => warn!(%err, "rejected new-party form"),
                }
                self.publish();
            }
        }
    }

    async fn refresh_parties(&mut self) {
        match self.gateway.list_parties().await {
            Ok(parties) => self.state.replace_parties(parties),
            Err(err) => error!(%err, "failed to fetch parties"),
        }
    }

    fn publish(&self) {
        let _ = self.tx.send(EngineResponse::Page(render(&self.state)));
    }
}
