// src/gui/actions/lookup.rs
use std::{sync::PoisonError, thread};

use eframe::egui;

use crate::{error::VerifyError, gui::app::App, verify::Code};

/// Start a lookup for the code in the lookup bar on a background thread.
/// A malformed code is rejected right here; no thread, no fetch.
pub fn lookup(app: &mut App, ctx: &egui::Context) {
    if app.running { return; }

    let code = app.state.code_text.trim().to_string();
    if let Err(e) = Code::parse(&code) {
        logd!("Lookup: UI rejected {:?}", code);
        app.status(format!("Error: {e}"));
        return;
    }

    let Some(verifier) = app.verifier.clone() else {
        app.status("Error: no document source");
        return;
    };

    app.running = true;
    app.current = None;
    app.status(format!("Fetching {code}…"));

    let slot = app.pending.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        let res = verifier.lookup(&code);
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(res);
        ctx2.request_repaint();
    });
}

/// Pick up a finished lookup, if any, and fill the review form.
pub fn poll_lookup(app: &mut App) {
    let done = app.pending.lock().unwrap_or_else(PoisonError::into_inner).take();
    let Some(res) = done else { return };
    app.running = false;

    match res {
        Ok(x) => {
            app.state.envio_text = s!(x.date());
            app.state.classe_text = s!(x.classification());
            let misses = [&x.envio, &x.classe].iter().filter(|f| !f.is_found()).count();
            app.status(match misses {
                0 => format!("Found {}. Review and confirm.", x.code),
                n => format!("Found {} ({} field(s) not found). Review and confirm.", x.code, n),
            });
            app.current = Some(x);
        }
        Err(VerifyError::DocumentNotFound(url)) => {
            app.status(format!("Document not found: {url}"));
        }
        Err(e) => {
            app.status(format!("Error: {e}"));
        }
    }
}
