// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};

use crate::{
    config::{
        consts::{
            BASE_URL, ENV_BASE_URL, ENV_RECORDS_FILE, ENV_REPORTS_DIR, ENV_TIMEOUT_SECS,
            FETCH_TIMEOUT_SECS, RECORD_HEADERS, RECORDS_FILE, RECORDS_SEP, REPORTS_DIR,
        },
        options::{AppOptions, ExportFormat, ExportOptions, SourceConfig, StoreConfig},
    },
    core::HttpSource,
    csv,
    progress::Progress,
    specs::{CLASSE, ENVIO},
    store::{ConfirmedRecord, RecordStore},
    verify::{Extraction, Verifier},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Look up CTR documents and keep a log of confirmed ones")]
pub struct Cli {
    /// Document URL prefix; the code is appended
    #[arg(long, env = ENV_BASE_URL, default_value = BASE_URL)]
    pub base_url: String,

    /// Per-fetch timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Confirmed-records CSV
    #[arg(long, env = ENV_RECORDS_FILE, default_value = RECORDS_FILE)]
    pub records: PathBuf,

    /// Directory for generated reports
    #[arg(long, env = ENV_REPORTS_DIR, default_value = REPORTS_DIR)]
    pub reports_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one or more documents and print Envio / Classe
    Lookup {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Look up a document and append it to the log, with optional corrections
    Confirm {
        code: String,
        /// accepted | restricted (or the stored labels)
        #[arg(long)]
        status: String,
        /// Override the extracted submission date
        #[arg(long)]
        envio: Option<String>,
        /// Override the extracted material class
        #[arg(long)]
        classe: Option<String>,
    },
    /// Print every confirmed record as CSV
    History,
    /// Write the log as a CSV or XLSX report
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
        /// Output file (default: <reports-dir>/resultados.csv | relatorio.xlsx)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Xlsx,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f { FormatArg::Csv => ExportFormat::Csv, FormatArg::Xlsx => ExportFormat::Xlsx }
    }
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            source: SourceConfig {
                base_url: self.base_url.clone(),
                timeout: Duration::from_secs(self.timeout),
                ..SourceConfig::default()
            },
            store: StoreConfig {
                records_path: self.records.clone(),
                reports_dir: self.reports_dir.clone(),
            },
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let opts = cli.options();

    match cli.command {
        Command::Lookup { codes } => {
            let verifier = Verifier::new(HttpSource::new(&opts.source)?);
            lookup(&verifier, &codes)
        }
        Command::Confirm { code, status, envio, classe } => {
            let store = RecordStore::open(opts.store)?;
            let verifier = Verifier::new(HttpSource::new(&opts.source)?);

            let x = verifier.lookup(&code)?;
            let rec = verifier.confirm(&x, envio.as_deref(), classe.as_deref(), &status)?;
            store.append_record(&rec)?;
            println!("Saved: {}", record_line(&rec));
            Ok(())
        }
        Command::History => {
            let store = RecordStore::open(opts.store)?;
            let rows: Vec<Vec<String>> = store.list()?.iter().map(ConfirmedRecord::to_row).collect();
            print!("{}", csv::rows_to_string(Some(&RECORD_HEADERS[..]), &rows, RECORDS_SEP));
            Ok(())
        }
        Command::Export { format, out } => {
            let store = RecordStore::open(opts.store)?;
            let export = ExportOptions { format: format.into(), out_path: out };
            let path = store.write_report(&export)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn lookup(verifier: &Verifier<HttpSource>, codes: &[String]) -> Result<()> {
    let results = if codes.len() == 1 {
        vec![(codes[0].clone(), verifier.lookup(&codes[0]))]
    } else {
        let mut prog = CliProgress::default();
        verifier.lookup_many(codes, Some(&mut prog))
    };

    let mut failed = 0usize;
    for (code, res) in &results {
        match res {
            Ok(x) => println!("{}", extraction_line(x)),
            Err(e) => {
                failed += 1;
                println!("{code}\terror: {e}");
            }
        }
    }

    match (failed, results.len()) {
        (0, _) => Ok(()),
        (1, 1) => Err(eyre!("lookup failed")),
        (n, total) => Err(eyre!("{n} of {total} lookups failed")),
    }
}

fn extraction_line(x: &Extraction) -> String {
    format!(
        "{}\t{}={}\t{}={}",
        x.code,
        ENVIO.label,
        x.date(),
        CLASSE.label,
        x.classification()
    )
}

fn record_line(r: &ConfirmedRecord) -> String {
    format!("{} | {} | {} | {} | {}", r.envio, r.code, r.classe, r.value, r.status_label())
}

/* ---------- Progress adapter ---------- */
#[derive(Default)]
struct CliProgress { done: usize, total: usize }

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Looking up {} code(s)…", total);
    }
    fn item_done(&mut self, code: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, code);
    }
    fn item_failed(&mut self, code: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {} failed: {}", self.done, self.total, code, reason);
    }
    fn finish(&mut self) {
        eprintln!("Done.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_confirm_with_overrides() {
        let cli = Cli::try_parse_from([
            "cli", "--records", "x.csv", "confirm", "12345678",
            "--status", "restricted", "--classe", "IIA",
        ]).unwrap();
        assert_eq!(cli.options().store.records_path, PathBuf::from("x.csv"));
        match cli.command {
            Command::Confirm { code, status, envio, classe } => {
                assert_eq!(code, "12345678");
                assert_eq!(status, "restricted");
                assert_eq!(envio, None);
                assert_eq!(classe.as_deref(), Some("IIA"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn lookup_requires_a_code() {
        assert!(Cli::try_parse_from(["cli", "lookup"]).is_err());
    }

    #[test]
    fn export_format_flag() {
        let cli = Cli::try_parse_from(["cli", "export", "--format", "xlsx"]).unwrap();
        assert!(matches!(cli.command, Command::Export { format: FormatArg::Xlsx, out: None }));
    }
}
