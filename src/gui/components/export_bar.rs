// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::{ExportFormat, ExportOptions},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let prev_fmt = app.state.export_format;

    ui.horizontal(|ui| {
        ui.label("Format:");
        ui.selectable_value(&mut app.state.export_format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut app.state.export_format, ExportFormat::Xlsx, "XLSX");

        // Keep the hint in step with the format the user picked.
        let hint = ExportOptions { format: app.state.export_format, out_path: None }
            .out_path(&app.opts.store)
            .to_string_lossy()
            .into_owned();

        ui.label("Output:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.out_path_text)
                .hint_text(hint)
                .desired_width(260.0)
                .font(egui::TextStyle::Monospace),
        );
    });

    if app.state.export_format != prev_fmt {
        logf!("UI: Export format → {:?}", app.state.export_format);
    }

    ui.horizontal(|ui| {
        let ctx = ui.ctx().clone();
        let has_rows = !app.history.is_empty();

        if ui.add_enabled(has_rows, egui::Button::new("Copy CSV")).clicked() {
            actions::copy_csv(app, &ctx);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.button("Reload").clicked() {
            app.reload_history();
            app.status(format!("Loaded {} record(s)", app.history.len()));
        }
    });
}
