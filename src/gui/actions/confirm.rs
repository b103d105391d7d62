// src/gui/actions/confirm.rs
use crate::gui::app::App;

/// Append the reviewed lookup (with any corrections) to the record log.
pub fn confirm(app: &mut App) {
    let Some(x) = &app.current else {
        app.status("Nothing to confirm: look up a code first");
        return;
    };
    let Some(verifier) = &app.verifier else {
        app.status("Error: no document source");
        return;
    };

    let confirmed = verifier.confirm(
        x,
        Some(app.state.envio_text.as_str()),
        Some(app.state.classe_text.as_str()),
        app.state.status_choice.label(),
    );

    let Some(store) = &app.store else {
        app.status("Error: record store unavailable");
        return;
    };

    let msg = match confirmed.and_then(|rec| store.append_record(&rec).map(|()| rec)) {
        Ok(rec) => {
            let msg = format!("Saved {} ({})", rec.code, rec.status_label());
            app.history.push(rec);
            msg
        }
        Err(e) => format!("Save error: {e}"),
    };

    app.current = None;
    app.status(msg);
}
