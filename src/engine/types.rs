// src/engine/types.rs
use std::fmt;

use crate::config::consts::NOT_FOUND;

/// Static description of one labeled value on the page.
///
/// Patterns are plain regex source; they are compiled case-insensitive at use.
/// A pattern that fails to compile just disables the stage that needs it.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Short machine name (logs, CLI output).
    pub name: &'static str,
    /// Human label as printed on the page.
    pub label: &'static str,
    /// Raw-markup pattern; capture group 1 is the value.
    pub raw: Option<&'static str>,
    /// Matches a text node that carries the label.
    pub label_pat: &'static str,
    /// Value-shaped pattern tried against the label node's own text.
    /// Capture group 1 if present, else the whole match.
    pub value: Option<&'static str>,
    /// `Label: rest-of-line` pattern for the label's parent text.
    pub line: Option<&'static str>,
    /// Look at the label's structural neighbours when its own text has no value.
    pub neighbors: bool,
}

/// Which strategy produced a value, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    RawPattern,
    LabelNode,
    ParentLine,
    NextSibling,
    NextElement,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::RawPattern  => "raw text",
            Stage::LabelNode   => "label node",
            Stage::ParentLine  => "parent line",
            Stage::NextSibling => "next sibling",
            Stage::NextElement => "next element",
        };
        f.write_str(s)
    }
}

/// Result for one field. `value` is never empty: a miss carries `NOT_FOUND`
/// and `stage == None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted {
    pub value: String,
    pub stage: Option<Stage>,
}

impl Extracted {
    pub fn found(value: String, stage: Stage) -> Self {
        Self { value, stage: Some(stage) }
    }

    pub fn not_found() -> Self {
        Self { value: s!(NOT_FOUND), stage: None }
    }

    pub fn is_found(&self) -> bool {
        self.stage.is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
