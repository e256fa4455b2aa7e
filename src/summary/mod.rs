//! Gradebook summarization.
//!
//! Classifies every column header, groups graded columns by module, and
//! averages each student's assessment and lab scores per module. Nothing here
//! fails: malformed headers are skipped and malformed cells count as missing.

pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod types;
pub mod utility;

use tracing::debug;

use crate::parser::RawTable;
use crate::summary::aggregate::{aggregate_rows, build_registry};
use crate::summary::classify::{classify_header, find_student_column};
use crate::summary::types::{Classification, Summary};

/// Runs the whole pipeline over a raw table.
#[tracing::instrument(skip(table), fields(columns = table.columns.len(), rows = table.rows.len()))]
pub fn summarize(table: &RawTable) -> Summary {
    let Some(identity) = find_student_column(&table.columns) else {
        return Summary::default();
    };

    let classifications: Vec<Classification> = table
        .columns
        .iter()
        .map(|name| {
            let classification = classify_header(name);
            match &classification {
                Classification::Graded { kind, raw_type, .. } => debug!(
                    column = %name,
                    ?kind,
                    raw_type = %raw_type,
                    module = classification.module().unwrap_or_default(),
                    "Graded column"
                ),
                Classification::Student => debug!(column = %name, "Student column"),
                Classification::Unclassified => {
                    debug!(column = %name, "Skipping unclassified column")
                }
            }
            classification
        })
        .collect();

    let registry = build_registry(&classifications, identity);
    let rows = aggregate_rows(table, &registry, identity);

    debug!(
        identity = %table.columns[identity],
        modules = registry.modules.len(),
        "Gradebook summarized"
    );

    Summary {
        modules: registry.module_names().map(str::to_string).collect(),
        rows,
    }
}
