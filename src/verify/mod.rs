// src/verify/mod.rs
//! Extraction Orchestrator: code check → fetch → both fields → `Extraction`.
mod code;
mod verify;

pub use code::Code;
pub use verify::{Extraction, LookupState, Verifier, extract_fields};
