//! Cell value normalization.
//!
//! Gradebook cells hold things like `91%`, `91`, `N/A 85` or nothing at all.
//! Parsing happens in two stages: a strict float parse of the cleaned text,
//! then a scan for the first embedded number. Anything else is missing.

use once_cell::sync::Lazy;
use regex::Regex;

static EMBEDDED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("number pattern is valid"));

/// Converts a raw cell into a percentage, or `None` when no usable number is
/// present. Never fails.
pub fn normalize_cell(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let cleaned = raw.trim().replace('%', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    strict_parse(cleaned)
        .or_else(|| extract_embedded(cleaned))
        .filter(|v| v.is_finite())
}

/// Parses the whole text as a float. Underscores are accepted as digit
/// separators only when they sit between two digits, as in `1_000`.
fn strict_parse(text: &str) -> Option<f64> {
    if !text.contains('_') {
        return text.parse::<f64>().ok();
    }

    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    text.replace('_', "").parse::<f64>().ok()
}

fn extract_embedded(text: &str) -> Option<f64> {
    EMBEDDED_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
