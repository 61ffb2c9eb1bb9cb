use std::sync::mpsc;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc::unbounded_channel;

use crate::engine::engine::Engine;
use crate::engine::gateway::HttpGateway;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::state::AppState;
use crate::ui::{center_panel, left_panel, right_panel};
use crate::view::{render, Page};

/* =========================
   App
   ========================= */

/// Presentation shell. Holds no application state beyond the last page the
/// engine published and the in-progress form input; every gesture becomes an
/// `EngineCommand` and every engine response replaces the page wholesale.
pub struct PlannerApp {
    pub page: Page,

    /// One buffer per form field, in field order. Reset to the tree's
    /// initial values whenever a new page arrives, like the original
    /// full-rebuild render wiping in-progress input.
    pub form_values: Vec<String>,

    pub cmd_tx: tokio::sync::mpsc::UnboundedSender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl PlannerApp {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build the engine runtime");

            let gateway = HttpGateway::from_env();
            let mut engine = Engine::new(cmd_rx, resp_tx, Box::new(gateway));
            runtime.block_on(engine.run());
        });

        let page = render(&AppState::default());
        let form_values = form_values_of(&page);

        Self {
            page,
            form_values,
            cmd_tx,
            resp_rx,
        }
    }
}

fn form_values_of(page: &Page) -> Vec<String> {
    page.form.fields.iter().map(|f| f.initial.clone()).collect()
}

/* =========================
   egui App
   ========================= */

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::Page(page) => {
                    self.form_values = form_values_of(&page);
                    self.page = page;
                }
            }
        }

        left_panel::draw_left_panel(ctx, &self.page.parties, &self.cmd_tx);
        right_panel::draw_right_panel(ctx, self);
        center_panel::draw_center_panel(ctx, &self.page, &self.cmd_tx);

        // Engine responses arrive off-thread; poll for them between frames.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
