use egui::Context;
use tokio::sync::mpsc::UnboundedSender;

use crate::engine::protocol::EngineCommand;
use crate::view::PartyListView;

pub fn draw_left_panel(
    ctx: &Context,
    view: &PartyListView,
    cmd_tx: &UnboundedSender<EngineCommand>,
) {
    egui::SidePanel::left("party_list")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading(&view.heading);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in &view.entries {
                    if ui.selectable_label(entry.selected, &entry.label).clicked() {
                        let _ = cmd_tx.send(EngineCommand::SelectParty(entry.party_id));
                    }
                }
            });
        });
}
