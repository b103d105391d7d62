// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::GuiState},
    core::HttpSource,
    error::VerifyError,
    store::{ConfirmedRecord, RecordStore},
    verify::{Extraction, Verifier},
};

pub fn run(options: eframe::NativeOptions, opts: AppOptions, state: GuiState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "CTR Verifier",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(opts, state)))),
    )?;
    Ok(())
}

/// Filled by the lookup worker, drained by the UI thread.
pub type PendingLookup = Arc<Mutex<Option<Result<Extraction, VerifyError>>>>;

pub struct App {
    pub opts: AppOptions,
    pub state: GuiState,

    // None when startup failed; the status line says why
    pub verifier: Option<Arc<Verifier<HttpSource>>>,
    pub store: Option<RecordStore>,

    /// Last successful lookup under review
    pub current: Option<Extraction>,
    pub pending: PendingLookup,
    pub running: bool,

    /// Confirmed records, oldest first
    pub history: Vec<ConfirmedRecord>,

    pub status: String,
}

impl App {
    pub fn new(opts: AppOptions, state: GuiState) -> Self {
        let mut status = s!("Idle");

        let verifier = match HttpSource::new(&opts.source) {
            Ok(src) => Some(Arc::new(Verifier::new(src))),
            Err(e) => {
                loge!("Init: document source unavailable: {}", e);
                status = format!("Error: {e}");
                None
            }
        };

        let store = match RecordStore::open(opts.store.clone()) {
            Ok(s) => Some(s),
            Err(e) => {
                loge!("Init: record store unavailable: {}", e);
                status = format!("Error: {e}");
                None
            }
        };

        let history = match store.as_ref().map(RecordStore::list) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                loge!("Init: could not read history: {}", e);
                Vec::new()
            }
            None => Vec::new(),
        };

        logf!(
            "Init: records={} history={} source={}",
            opts.store.records_path.display(),
            history.len(),
            opts.source.base_url
        );

        Self {
            opts,
            state,
            verifier,
            store,
            current: None,
            pending: Arc::new(Mutex::new(None)),
            running: false,
            history,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn reload_history(&mut self) {
        let Some(store) = &self.store else { return };
        match store.list() {
            Ok(v) => self.history = v,
            Err(e) => loge!("History: reload failed: {}", e),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll_lookup(self);

        egui::TopBottomPanel::top("lookup").show(ctx, |ui| {
            ui.add_space(4.0);
            super::components::lookup_bar::draw(ui, self);
            ui.separator();
            super::components::review_panel::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            ui.add_space(4.0);
            super::components::export_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::history_table::draw(ui, self);
        });
    }
}
