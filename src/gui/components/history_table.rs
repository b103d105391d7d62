// src/gui/components/history_table.rs
//
// Confirmed records, oldest first. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::RECORD_HEADERS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(format!("Histórico ({})", app.history.len()));
    ui.separator();

    if app.history.is_empty() {
        ui.weak("No confirmed records yet.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .stick_to_bottom(true)
        .column(Column::auto().at_least(80.0).resizable(true))
        .column(Column::auto().at_least(80.0).resizable(true))
        .column(Column::remainder().at_least(160.0).resizable(true))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(140.0))
        .header(20.0, |mut header| {
            for h in RECORD_HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(18.0, app.history.len(), |mut row| {
                let Some(rec) = app.history.get(row.index()) else { return };
                let status = rec.status_label();
                for cell in [&rec.envio, &rec.code, &rec.classe, &rec.value] {
                    row.col(|ui| { ui.label(cell.as_str()); });
                }
                row.col(|ui| { ui.label(status); });
            });
        });
}
