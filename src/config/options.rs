// src/config/options.rs
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything the front ends decide once at startup.
/// Built from defaults, then overridden by CLI flags / env; read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceConfig,
    pub store: StoreConfig,
}

impl AppOptions {
    /// Defaults with `CTR_*` environment overrides applied.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(v) = env::var(ENV_BASE_URL) {
            opts.source.base_url = v;
        }
        if let Some(secs) = env::var(ENV_TIMEOUT_SECS).ok().and_then(|v| v.trim().parse().ok()) {
            opts.source.timeout = Duration::from_secs(secs);
        }
        if let Ok(v) = env::var(ENV_RECORDS_FILE) {
            opts.store.records_path = PathBuf::from(v);
        }
        if let Ok(v) = env::var(ENV_REPORTS_DIR) {
            opts.store.reports_dir = PathBuf::from(v);
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    /// Document URL is `base_url` + code.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

/// Where confirmed records and generated reports live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub records_path: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(RECORDS_FILE),
            reports_dir: PathBuf::from(REPORTS_DIR),
        }
    }
}

impl StoreConfig {
    /// Both paths rooted under `dir` (tests, portable installs).
    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            records_path: dir.join(RECORDS_FILE),
            reports_dir: dir.join(REPORTS_DIR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Xlsx => "xlsx" }
    }

    /// Default report file name inside the reports directory.
    pub fn report_file(&self) -> &'static str {
        match self { ExportFormat::Csv => REPORT_CSV_FILE, ExportFormat::Xlsx => REPORT_XLSX_FILE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Explicit output file; `None` means `<reports_dir>/<format default>`.
    pub out_path: Option<PathBuf>,
}

impl ExportOptions {
    pub fn out_path(&self, store: &StoreConfig) -> PathBuf {
        match &self.out_path {
            // A bare name gets the format's extension.
            Some(p) if p.extension().is_none() => p.with_extension(self.format.ext()),
            Some(p) => p.clone(),
            None => store.reports_dir.join(self.format.report_file()),
        }
    }

    /// Parse GUI/CLI text into an explicit path. Blank resets to the default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_export_lands_in_reports_dir() {
        let store = StoreConfig::default();
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(&store), PathBuf::from(REPORTS_DIR).join(REPORT_CSV_FILE));

        export.format = ExportFormat::Xlsx;
        assert_eq!(export.out_path(&store), PathBuf::from(REPORTS_DIR).join(REPORT_XLSX_FILE));
    }

    #[test]
    fn set_path_blank_resets() {
        let mut export = ExportOptions::default();
        export.set_path("out/x.csv");
        assert_eq!(export.out_path, Some(PathBuf::from("out/x.csv")));
        export.set_path("   ");
        assert_eq!(export.out_path, None);
    }

    #[test]
    fn bare_name_gets_format_extension() {
        let store = StoreConfig::default();
        let mut export = ExportOptions { format: ExportFormat::Xlsx, out_path: None };
        export.set_path("out/semana");
        assert_eq!(export.out_path(&store), PathBuf::from("out/semana.xlsx"));

        export.set_path("out/semana.txt");
        assert_eq!(export.out_path(&store), PathBuf::from("out/semana.txt"));
    }
}
