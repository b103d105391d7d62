// tests/report_export.rs
use std::fs;
use std::path::PathBuf;

use ctr_verify::config::consts::{REPORT_CSV_FILE, REPORT_XLSX_FILE};
use ctr_verify::config::options::{ExportFormat, ExportOptions, StoreConfig};
use ctr_verify::store::{RecordDraft, RecordStore};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ctr_export_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn seeded(name: &str) -> RecordStore {
    let store = RecordStore::open(StoreConfig::rooted_at(&tmp_dir(name))).unwrap();
    for (code, classe, status) in [
        ("12345678", "IIA", "Aceito"),
        ("87654321", "Classe II, B", "Aceito com restrição"),
    ] {
        let d = RecordDraft {
            envio: "03/04/2025".into(),
            code: code.into(),
            classe: classe.into(),
            status: status.into(),
        };
        store.append(&d).unwrap();
    }
    store
}

#[test]
fn csv_export_is_the_log_verbatim() {
    let store = seeded("csv");
    let bytes = store.export(ExportFormat::Csv).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "Envio,Código,Classe do Material,Valor,Status\n\
         03/04/2025,12345678,IIA,\"R$ 0,00\",Aceito\n\
         03/04/2025,87654321,\"Classe II, B\",\"R$ 0,00\",Aceito com restrição\n"
    );
    assert_eq!(text, fs::read_to_string(&store.config().records_path).unwrap());
}

#[test]
fn empty_log_exports_header_only() {
    let store = RecordStore::open(StoreConfig::rooted_at(&tmp_dir("empty"))).unwrap();
    let text = String::from_utf8(store.export(ExportFormat::Csv).unwrap()).unwrap();
    assert_eq!(text, "Envio,Código,Classe do Material,Valor,Status\n");
    // A spreadsheet with only the header row is still a valid workbook.
    assert!(store.export(ExportFormat::Xlsx).unwrap().starts_with(b"PK"));
}

#[test]
fn xlsx_export_is_a_zip_workbook() {
    let store = seeded("xlsx");
    let bytes = store.export(ExportFormat::Xlsx).unwrap();
    assert!(bytes.len() > 100);
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn report_defaults_into_reports_dir() {
    let store = seeded("default_path");
    for (format, name) in [(ExportFormat::Csv, REPORT_CSV_FILE), (ExportFormat::Xlsx, REPORT_XLSX_FILE)] {
        let opts = ExportOptions { format, out_path: None };
        let path = store.write_report(&opts).unwrap();
        assert_eq!(path, store.config().reports_dir.join(name));
        assert_eq!(fs::read(&path).unwrap(), store.export(format).unwrap());
    }
}

#[test]
fn report_honors_explicit_path_and_creates_parents() {
    let store = seeded("explicit");
    let target = tmp_dir("explicit_out").join("nested").join("mine.csv");

    let mut opts = ExportOptions::default();
    opts.set_path(target.to_str().unwrap());
    let path = store.write_report(&opts).unwrap();

    assert_eq!(path, target);
    assert!(fs::read_to_string(&path).unwrap().starts_with("Envio,"));
}

#[test]
fn three_column_log_exports_with_blank_cells() {
    let dir = tmp_dir("legacy");
    let cfg = StoreConfig::rooted_at(&dir);
    fs::write(&cfg.records_path, "Envio,Código,Classe do Material\n01/02/2024,12345678,IIA\n").unwrap();
    let store = RecordStore::open(cfg).unwrap();

    let text = String::from_utf8(store.export(ExportFormat::Csv).unwrap()).unwrap();
    assert_eq!(
        text,
        "Envio,Código,Classe do Material,Valor,Status\n01/02/2024,12345678,IIA,,\n"
    );
    assert!(store.export(ExportFormat::Xlsx).unwrap().starts_with(b"PK"));
}
