// src/specs/mod.rs
//! # Field specs for the CTR print page
//!
//! Each spec says *where the ground truth lives* on `ImprimeCTR.aspx` for one
//! labeled value, in the terms the extraction engine understands (raw-text
//! pattern, label pattern, value shape, neighbour fallback).
//!
//! ## What lives here
//! - Pattern text only. No parsing, no fetching, no fallback logic.
//!
//! ## What does **not** live here
//! - Strategy order and the sentinel: `engine`.
//! - Fetching and the identifier check: `verify` / `core::net`.
//!
//! ## Page notes
//! - The submission date is printed as `Envio: dd/mm/yyyy`, sometimes as
//!   `Data de Envio`, sometimes with the label and date in one text node but
//!   split across markup.
//! - The material class sits next to a `Classe` label, either in the same
//!   element (`Classe: IIA`), a child (`<div>Classe: <span>IIA</span></div>`),
//!   or the next cell (`<td>Classe</td><td>IIA</td>`). Raw-text matching is
//!   useless for it because the markup between label and value varies.
//!
//! Specs should be testable **offline** against captured page fragments.

use crate::engine::FieldSpec;

const DATE: &str = r"([0-9]{2}/[0-9]{2}/[0-9]{4})";

/// Submission date ("Envio").
pub static ENVIO: FieldSpec = FieldSpec {
    name: "envio",
    label: "Envio",
    raw: Some(r"Envio[:\s]*([0-9]{2}/[0-9]{2}/[0-9]{4})"),
    label_pat: r"\bEnvio\b",
    value: Some(DATE),
    line: None,
    neighbors: false,
};

/// Material classification ("Classe").
pub static CLASSE: FieldSpec = FieldSpec {
    name: "classe",
    label: "Classe",
    raw: None,
    label_pat: r"\bClasse\b",
    value: None,
    line: Some(r"Classe[:\s]*([^\n\r]+)"),
    neighbors: true,
};
