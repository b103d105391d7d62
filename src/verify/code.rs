// src/verify/code.rs
use std::fmt;

use crate::config::consts::CODE_LEN;
use crate::core::sanitize::is_numeric_code;
use crate::error::VerifyError;

/// A CTR code that passed the shape check (exactly 8 ASCII digits).
/// Holding one means no fetch can be attempted with a malformed id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Code(String);

impl Code {
    pub fn parse(raw: &str) -> Result<Self, VerifyError> {
        if is_numeric_code(raw, CODE_LEN) {
            Ok(Self(s!(raw)))
        } else {
            Err(VerifyError::InvalidIdentifier(s!(raw)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Code {
    type Err = VerifyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
