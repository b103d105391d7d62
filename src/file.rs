// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::csv::write_row;

/// Create/truncate `path` and write the header row.
pub fn write_rows_start<S: AsRef<str>>(path: &Path, headers: &[S], sep: char) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_row(&mut out, headers, sep)?;
    out.flush()
}

/// Append rows to an existing CSV file (must be created already).
/// The file is flushed before returning so a row is never left half-written.
pub fn append_rows<S: AsRef<str>>(path: &Path, rows: &[Vec<S>], sep: char) -> io::Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for row in rows {
        write_row(&mut out, &row[..], sep)?;
    }
    out.flush()?;
    out.get_ref().sync_data()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Write a finished export to `path`, creating parent directories.
/// Returns the final path written to.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(path.to_path_buf())
}

/// One-sheet workbook: bold header row, then every row as text cells.
pub fn xlsx_bytes<S: AsRef<str>>(
    sheet: &str,
    headers: &[S],
    rows: &[Vec<String>],
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let ws = workbook.add_worksheet();
    ws.set_name(sheet)?;

    for (c, h) in headers.iter().enumerate() {
        ws.write_string_with_format(0, c as u16, h.as_ref(), &bold)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            ws.write_string(r as u32 + 1, c as u16, cell.as_str())?;
        }
    }

    workbook.save_to_buffer()
}
