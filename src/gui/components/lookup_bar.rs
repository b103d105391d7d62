// src/gui/components/lookup_bar.rs
//
// Code field + Buscar button. Enter in the field also triggers a lookup.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        ui.label("Código CTR:");

        let resp = ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.state.code_text)
                .hint_text("8 dígitos")
                .char_limit(8)
                .desired_width(110.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui.add_enabled(!app.running, egui::Button::new("Buscar")).clicked();
        if clicked || enter {
            actions::lookup(app, &ctx);
        }

        if app.running {
            ui.spinner();
        }

        if let Some(x) = &app.current {
            ui.separator();
            ui.hyperlink_to("Abrir documento", &x.url);
        }
    });
}
