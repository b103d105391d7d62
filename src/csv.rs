// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
/// Blank lines are skipped; an unterminated quote runs to end of input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split off a header row if the first cell equals `first_header` (case-insensitive).
pub fn split_header(
    mut rows: Vec<Vec<String>>,
    first_header: &str,
) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| c.trim().eq_ignore_ascii_case(first_header));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Headers (if any) plus rows as one CSV string.
pub fn rows_to_string<H: AsRef<str>>(headers: Option<&[H]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, &r[..], sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_crlf() {
        let rows = parse_rows("a,\"b,c\",\"d \"\"e\"\"\"\r\n\r\nx,y,z", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b,c"), s!("d \"e\"")],
            vec![s!("x"), s!("y"), s!("z")],
        ]);
    }

    #[test]
    fn write_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["03/04/2025", "Classe II, A", "R$ 0,00"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "03/04/2025,\"Classe II, A\",\"R$ 0,00\"\n");
    }

    #[test]
    fn header_detection_is_exact_first_cell() {
        let rows = parse_rows("Envio,Código\n01/01/2024,12345678\n", ',');
        let (h, r) = split_header(rows, "envio");
        assert_eq!(h.unwrap()[1], "Código");
        assert_eq!(r.len(), 1);

        let rows = parse_rows("01/01/2024,12345678\n", ',');
        let (h, r) = split_header(rows, "Envio");
        assert!(h.is_none());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn bom_is_ignored() {
        let rows = parse_rows("\u{feff}Envio,Código\n", ',');
        assert_eq!(rows[0][0], "Envio");
    }
}
