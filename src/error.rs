// src/error.rs
use thiserror::Error;

/// Failures a lookup can report to the caller.
/// A field that cannot be found is *not* one of these; it comes back as the sentinel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("invalid code {0:?}: must be 8 numeric digits")]
    InvalidIdentifier(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
}

/// Document Source boundary outcome (anything but a body).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("remote reports no such document")]
    NotFound,

    #[error("{0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("code is required")]
    MissingCode,

    #[error("invalid status: {0:?}")]
    InvalidStatus(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
