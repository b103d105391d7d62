// src/store.rs
//! Record Store: append-only CSV log of human-confirmed lookups.
//!
//! One row per confirmation, columns `Envio, Código, Classe do Material, Valor, Status`.
//! Rows are never edited or removed here; `list` replays them in file order and
//! `export` renders the whole log as CSV or XLSX.

use std::{
    fmt, fs, io,
    path::PathBuf,
    str::FromStr,
    sync::{Mutex, PoisonError},
};

use crate::{
    config::{
        consts::{PLACEHOLDER_VALUE, RECORD_HEADERS, RECORDS_SEP, REPORT_SHEET},
        options::{ExportFormat, ExportOptions, StoreConfig},
    },
    core::sanitize::normalize_ws,
    csv, file,
    error::StoreError,
    verify::Extraction,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Accepted,
    AcceptedWithRestriction,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Accepted, Status::AcceptedWithRestriction];

    /// Label written to the log and shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Accepted => "Aceito",
            Status::AcceptedWithRestriction => "Aceito com restrição",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = StoreError;

    /// Stored labels, their English names, and the CLI shorthands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aceito" | "accepted" => Ok(Status::Accepted),
            "aceito com restrição" | "aceito com restricao" | "accepted with restriction"
            | "restricted" => Ok(Status::AcceptedWithRestriction),
            _ => Err(StoreError::InvalidStatus(s!(s))),
        }
    }
}

/// Unvalidated confirmation as it comes from a form or the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub envio: String,
    pub code: String,
    pub classe: String,
    pub status: String,
}

impl RecordDraft {
    /// Pre-fill from a lookup; `status` is raw text and is checked by `validate`.
    pub fn from_extraction(x: &Extraction, status: &str) -> Self {
        Self {
            envio: s!(x.date()),
            code: s!(x.code.as_str()),
            classe: s!(x.classification()),
            status: s!(status),
        }
    }

    /// Replace extracted values with the reviewer's; `None` keeps the extracted one.
    pub fn with_corrections(mut self, envio: Option<&str>, classe: Option<&str>) -> Self {
        if let Some(v) = envio { self.envio = s!(v); }
        if let Some(v) = classe { self.classe = s!(v); }
        self
    }

    /// All-or-nothing: a draft either becomes a full record or is rejected.
    pub fn validate(&self) -> Result<ConfirmedRecord, StoreError> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(StoreError::MissingCode);
        }
        let status: Status = self.status.parse()?;
        Ok(ConfirmedRecord {
            envio: normalize_ws(&self.envio),
            code: s!(code),
            classe: normalize_ws(&self.classe),
            value: s!(PLACEHOLDER_VALUE),
            status: Some(status),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedRecord {
    pub envio: String,
    pub code: String,
    pub classe: String,
    /// Always `R$ 0,00` for now.
    pub value: String,
    /// `None` only for rows read from logs written before the column existed.
    pub status: Option<Status>,
}

impl ConfirmedRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.envio.clone(),
            self.code.clone(),
            self.classe.clone(),
            self.value.clone(),
            s!(self.status_label()),
        ]
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or("", |s| s.label())
    }

    /// Tolerates short rows (missing cells read as empty).
    /// A missing or blank status is kept as `None`; any other text must parse.
    pub fn from_row(row: &[String]) -> Result<Self, StoreError> {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        let status = match cell(4).trim() {
            "" => None,
            s => Some(s.parse()?),
        };
        Ok(Self {
            envio: cell(0),
            code: cell(1),
            classe: cell(2),
            value: cell(3),
            status,
        })
    }
}

pub struct RecordStore {
    cfg: StoreConfig,
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Create the log (with headers) and the reports directory if missing.
    pub fn open(cfg: StoreConfig) -> Result<Self, StoreError> {
        file::ensure_directory(&cfg.reports_dir)?;

        let needs_headers = match fs::metadata(&cfg.records_path) {
            Ok(m) => m.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };
        if needs_headers {
            file::write_rows_start(&cfg.records_path, &RECORD_HEADERS[..], RECORDS_SEP)?;
            logf!("Store: Created {}", cfg.records_path.display());
        }

        Ok(Self { cfg, write_lock: Mutex::new(()) })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }

    /// Validate, then append exactly one row. Rejected drafts write nothing.
    pub fn append(&self, draft: &RecordDraft) -> Result<ConfirmedRecord, StoreError> {
        let record = draft.validate().inspect_err(|e| {
            loge!("Store: Rejected code={:?}: {}", draft.code, e);
        })?;
        self.append_record(&record)?;
        Ok(record)
    }

    /// Append a record that already passed validation.
    pub fn append_record(&self, record: &ConfirmedRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let row = record.to_row();
        file::append_rows(&self.cfg.records_path, std::slice::from_ref(&row), RECORDS_SEP)?;

        logf!("Store: Appended code={} status={}", record.code, record.status_label());
        Ok(())
    }

    /// Every stored record, oldest first.
    pub fn list(&self) -> Result<Vec<ConfirmedRecord>, StoreError> {
        if !self.cfg.records_path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.cfg.records_path)?;
        let (_, rows) = csv::split_header(csv::parse_rows(&text, RECORDS_SEP), RECORD_HEADERS[0]);

        let mut out = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            match ConfirmedRecord::from_row(row) {
                Ok(r) => out.push(r),
                Err(e) => loge!("Store: Skipping row {}: {}", i + 1, e),
            }
        }
        Ok(out)
    }

    /// Whole log rendered in `format`, header row first.
    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>, StoreError> {
        let rows: Vec<Vec<String>> = self.list()?.iter().map(ConfirmedRecord::to_row).collect();
        let bytes = match format {
            ExportFormat::Csv => {
                csv::rows_to_string(Some(&RECORD_HEADERS[..]), &rows, RECORDS_SEP).into_bytes()
            }
            ExportFormat::Xlsx => file::xlsx_bytes(REPORT_SHEET, &RECORD_HEADERS[..], &rows)?,
        };
        logd!("Store: Export {:?} rows={} bytes={}", format, rows.len(), bytes.len());
        Ok(bytes)
    }

    /// Render and write to `export.out_path` (default: inside the reports dir).
    pub fn write_report(&self, export: &ExportOptions) -> Result<PathBuf, StoreError> {
        let bytes = self.export(export.format)?;
        let path = file::write_bytes(&export.out_path(&self.cfg), &bytes)?;
        logf!("Export: OK {}", path.display());
        Ok(path)
    }
}
