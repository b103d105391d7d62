// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{lookup, confirm, export, ...}.

mod confirm; // src/gui/actions/confirm.rs
mod export;  // src/gui/actions/export.rs
mod lookup;  // src/gui/actions/lookup.rs

pub use confirm::confirm;
pub use export::{copy_csv, export};
pub use lookup::{lookup, poll_lookup};
