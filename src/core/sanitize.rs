// src/core/sanitize.rs

/// Collapse whitespace runs into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Trimmed first non-empty line of `s`, if any.
/// Leading blank lines are skipped; an all-blank input yields `None`.
pub fn first_line(s: &str) -> Option<String> {
    s.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// Drop label punctuation left in front of a value (`": IIA"` → `"IIA"`).
pub fn strip_leading_punct(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
}

/// Exactly `len` ASCII digits.
pub fn is_numeric_code(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
