// src/gui/components/review_panel.rs
//
// Extracted values, editable before confirming. A field that came back as the
// sentinel is flagged so the reviewer knows to fill it in by hand.

use eframe::egui;

use crate::{
    engine::Extracted,
    gui::{actions, app::App},
    store::Status,
};

fn source_hint(ui: &mut egui::Ui, field: Option<&Extracted>) {
    match field {
        Some(f) if f.is_found() => {
            if let Some(stage) = f.stage {
                ui.weak(format!("({stage})"));
            }
        }
        Some(_) => {
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), "not found");
        }
        None => {}
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let reviewing = app.current.is_some();

    egui::Grid::new("review")
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Envio:");
            ui.add_enabled(reviewing, egui::TextEdit::singleline(&mut app.state.envio_text));
            source_hint(ui, app.current.as_ref().map(|x| &x.envio));
            ui.end_row();

            ui.label("Classe do Material:");
            ui.add_enabled(reviewing, egui::TextEdit::singleline(&mut app.state.classe_text));
            source_hint(ui, app.current.as_ref().map(|x| &x.classe));
            ui.end_row();

            ui.label("Status:");
            ui.horizontal(|ui| {
                for st in Status::ALL {
                    ui.radio_value(&mut app.state.status_choice, st, st.label());
                }
            });
            ui.end_row();
        });

    ui.horizontal(|ui| {
        if ui.add_enabled(reviewing, egui::Button::new("Registrar")).clicked() {
            actions::confirm(app);
        }
        ui.label(format!("Status: {}", app.status));
    });
}
