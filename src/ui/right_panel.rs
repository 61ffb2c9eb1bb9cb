use egui::Context;
use tokio::sync::mpsc::UnboundedSender;

use crate::engine::protocol::{EngineCommand, NewPartyInput};
use crate::view::{FieldKind, NewPartyForm};

use super::app::PlannerApp;

pub fn draw_right_panel(ctx: &Context, app: &mut PlannerApp) {
    let form = &app.page.form;
    let values = &mut app.form_values;
    let cmd_tx: &UnboundedSender<EngineCommand> = &app.cmd_tx;

    egui::SidePanel::right("new_party_form")
        .resizable(true)
        .default_width(280.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            ui.heading(&form.heading);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (field, value) in form.fields.iter().zip(values.iter_mut()) {
                    ui.label(&field.label);

                    let hint = match field.kind {
                        FieldKind::Date => "YYYY-MM-DD",
                        FieldKind::Time => "HH:MM",
                        FieldKind::Text => "",
                    };
                    ui.add(egui::TextEdit::singleline(value).hint_text(hint));
                    ui.add_space(4.0);
                }

                if ui.button(&form.submit_label).clicked() {
                    let input = collect_input(form, values.as_slice());
                    let _ = cmd_tx.send(EngineCommand::SubmitNewParty(input));
                }
            });
        });
}

/// Pairs each field key with its buffer. Unknown keys are dropped, so the
/// payload always matches what the engine validates.
fn collect_input(form: &NewPartyForm, values: &[String]) -> NewPartyInput {
    let mut input = NewPartyInput::default();

    for (field, value) in form.fields.iter().zip(values.iter()) {
        let value = value.clone();
        match field.key.as_str() {
            "name" => input.name = value,
            "description" => input.description = value,
            "date" => input.date = value,
            "time" => input.time = value,
            "location" => input.location = value,
            _ => {}
        }
    }

    input
}
