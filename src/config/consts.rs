// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://rcc-spregula.coletas.online/Transportador/CTR/ImprimeCTR.aspx?id=";
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("ctr_verify/", env!("CARGO_PKG_VERSION"));

// Identifier shape
pub const CODE_LEN: usize = 8;

// Extraction
pub const NOT_FOUND: &str = "Não encontrada";

// Records
pub const RECORDS_FILE: &str = "resultados.csv";
pub const RECORDS_SEP: char = ',';
pub const RECORD_HEADERS: [&str; 5] = ["Envio", "Código", "Classe do Material", "Valor", "Status"];
pub const PLACEHOLDER_VALUE: &str = "R$ 0,00";

// Reports
pub const REPORTS_DIR: &str = "relatorios";
pub const REPORT_CSV_FILE: &str = "resultados.csv";
pub const REPORT_XLSX_FILE: &str = "relatorio.xlsx";
pub const REPORT_SHEET: &str = "Relatório";

// Local cache / logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Concurrency (batch lookups)
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Env overrides (GUI reads these directly, the CLI through clap)
pub const ENV_BASE_URL: &str = "CTR_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CTR_TIMEOUT_SECS";
pub const ENV_RECORDS_FILE: &str = "CTR_CSV_FILE";
pub const ENV_REPORTS_DIR: &str = "CTR_REPORTS_DIR";
