use egui::Context;
use tokio::sync::mpsc::UnboundedSender;

use crate::engine::protocol::EngineCommand;
use crate::view::{DetailBody, Page};

pub fn draw_center_panel(
    ctx: &Context,
    page: &Page,
    cmd_tx: &UnboundedSender<EngineCommand>,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(&page.title);
        ui.add_space(6.0);
        ui.heading(&page.detail.heading);
        ui.separator();

        match &page.detail.body {
            DetailBody::Prompt(text) => {
                ui.label(text);
            }
            DetailBody::Party(card) => {
                ui.strong(&card.title);
                ui.label(&card.date);
                ui.label(&card.location);
                ui.add_space(4.0);
                ui.label(&card.description);
                ui.add_space(6.0);

                if ui.button(&card.remove_label).clicked() {
                    let _ = cmd_tx.send(EngineCommand::RemoveParty(card.party_id));
                }

                ui.separator();
                for guest in &card.guests {
                    ui.label(format!("• {guest}"));
                }
            }
        }
    });
}
