//! Header classification.
//!
//! Gradebook exports name graded columns like `Assessment - 1.1.6 Network
//! Topologies` or `Lab - B.2.7 Lab: Create Network Topologies`. The first
//! segment of the dotted code is the module.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::summary::types::{Classification, Kind};

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?P<type>\w+)\s*-\s*(?P<code>[\w.]+)\s*(?P<rest>.*)$")
        .expect("header pattern is valid")
});

/// Returns true when a header names a student column.
pub fn is_student_header(name: &str) -> bool {
    name.trim().to_lowercase().starts_with("student")
}

/// Classifies a single column header. Never fails: anything that is not a
/// student column or a `<type> - <code>` header is [`Classification::Unclassified`].
pub fn classify_header(name: &str) -> Classification {
    if is_student_header(name) {
        return Classification::Student;
    }

    let Some(caps) = HEADER_RE.captures(name) else {
        return Classification::Unclassified;
    };

    let raw_type = caps["type"].trim().to_lowercase();
    let code = caps["code"].trim();
    let module = code.split('.').next().unwrap_or(code).to_string();

    // Types other than assessments and labs still count as assessments.
    let kind = if raw_type.contains("assess") {
        Kind::Assessment
    } else if raw_type.contains("lab") {
        Kind::Lab
    } else {
        Kind::Assessment
    };

    Classification::Graded {
        kind,
        module,
        raw_type,
    }
}

/// Picks the student identity column: the first header starting with
/// "student", else the first column. `None` only for an empty header list.
pub fn find_student_column(columns: &[String]) -> Option<usize> {
    if columns.is_empty() {
        return None;
    }
    match columns.iter().position(|c| is_student_header(c)) {
        Some(idx) => Some(idx),
        None => {
            debug!(fallback = %columns[0], "No student column found, using first column");
            Some(0)
        }
    }
}
