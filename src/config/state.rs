// src/config/state.rs
use super::options::ExportFormat;
use crate::store::Status;

/// GUI-only state: form fields and toggles. Lives on the UI thread.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Code typed in the lookup bar
    pub code_text: String,

    /// Review fields, pre-filled by a lookup and editable before confirming
    pub envio_text: String,
    pub classe_text: String,
    pub status_choice: Status,

    pub export_format: ExportFormat,
    /// Blank means the default report path
    pub out_path_text: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            code_text: s!(),
            envio_text: s!(),
            classe_text: s!(),
            status_choice: Status::Accepted,
            export_format: ExportFormat::Csv,
            out_path_text: s!(),
            window_w: 900,
            window_h: 620,
        }
    }
}
