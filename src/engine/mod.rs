// src/engine/mod.rs
//! Field extraction engine.
//!
//! Given page markup and a `FieldSpec`, walk a fixed chain of strategies and
//! return the first value found:
//!
//! ```text
//! RawPattern   regex over the raw markup text
//! LabelNode    label-bearing text node, value-shaped regex over its own text
//! ParentLine   "Label: rest" in the label's parent element text
//! NextSibling  parent's next sibling element
//! NextElement  next element after the parent in document order
//! (terminal)   NOT_FOUND sentinel
//! ```
//!
//! Each strategy is a plain `fn(&Document, &FieldSpec) -> Option<String>`.
//! Nothing in here returns an error: a stage that cannot run (no pattern,
//! bad pattern, no label node, no parent) simply yields `None`.

mod engine;
mod types;

pub use engine::{CHAIN, Document, Strategy, extract, extract_str};
pub use types::{Extracted, FieldSpec, Stage};
