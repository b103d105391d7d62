// src/gui/actions/export.rs
use eframe::egui;

use crate::{
    config::options::{ExportFormat, ExportOptions},
    gui::app::App,
};

/// Write the whole log as a report in the chosen format.
pub fn export(app: &mut App) {
    let Some(store) = &app.store else {
        app.status("Error: record store unavailable");
        return;
    };

    let mut export = ExportOptions { format: app.state.export_format, out_path: None };
    export.set_path(&app.state.out_path_text);

    logf!(
        "Export: Begin format={:?} rows={} → {}",
        export.format,
        app.history.len(),
        export.out_path(store.config()).display()
    );

    let msg = match store.write_report(&export) {
        Ok(path) => format!("Exported {} record(s) → {}", app.history.len(), path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}

/// Put the log, as CSV text, on the clipboard.
pub fn copy_csv(app: &mut App, ctx: &egui::Context) {
    if app.history.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let Some(store) = &app.store else {
        app.status("Error: record store unavailable");
        return;
    };

    let msg = match store.export(ExportFormat::Csv) {
        Ok(bytes) => {
            ctx.copy_text(String::from_utf8_lossy(&bytes).into_owned());
            format!("Copied {} record(s) to clipboard", app.history.len())
        }
        Err(e) => format!("Copy error: {e}"),
    };
    app.status(msg);
}
