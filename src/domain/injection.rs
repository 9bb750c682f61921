//! Placeholder injection for script templates.
//!
//! A placeholder is `__NAME__`, where `NAME` is made of uppercase ASCII letters, digits, and
//! underscores. Substitution is a single left-to-right pass: inserted values are copied to the
//! output and never scanned again, and placeholders without a value are kept verbatim.

use std::collections::{BTreeMap, BTreeSet};

const DELIMITER: &str = "__";

/// Flat placeholder name to value mapping.
pub type Substitutions = BTreeMap<String, String>;

/// Replace every placeholder whose name is present in `values`.
pub fn inject(template: &str, values: &Substitutions) -> String {
    let mut out = String::with_capacity(template.len());
    let mut copied_until = 0;
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find(DELIMITER) {
        let start = cursor + offset;
        match match_placeholder(template, start, |name| values.contains_key(name)) {
            Some((name, end)) => {
                out.push_str(&template[copied_until..start]);
                out.push_str(&values[name]);
                copied_until = end;
                cursor = end;
            }
            None => cursor = start + 1,
        }
    }

    out.push_str(&template[copied_until..]);
    out
}

/// Distinct placeholder names referenced by `template`.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find(DELIMITER) {
        let start = cursor + offset;
        match match_placeholder(template, start, |_| true) {
            Some((name, end)) => {
                found.insert(name.to_string());
                cursor = end;
            }
            None => cursor = start + 1,
        }
    }

    found
}

/// Try to read a placeholder opening at byte `start`.
///
/// Candidate names end at each `__` inside the identifier run, shortest first; the first one
/// `accept` agrees to wins. Returns the name and the byte offset just past the closing delimiter.
fn match_placeholder(
    template: &str,
    start: usize,
    accept: impl Fn(&str) -> bool,
) -> Option<(&str, usize)> {
    let body_start = start + DELIMITER.len();
    let body = &template[body_start..];
    let run_len = body.bytes().take_while(|b| is_name_byte(*b)).count();
    let run = &body[..run_len];

    let mut search_from = 1;
    while search_from < run_len {
        let name_end = search_from + run[search_from..].find(DELIMITER)?;
        let name = &run[..name_end];
        if accept(name) {
            return Some((name, body_start + name_end + DELIMITER.len()));
        }
        search_from = name_end + 1;
    }
    None
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_uppercase() || byte.is_ascii_digit() || byte == b'_'
}
