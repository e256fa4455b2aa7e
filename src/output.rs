//! Rendering for gradebook summaries.
//!
//! Supports an HTML table, CSV, and pretty-printed JSON.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::summary::types::Summary;

/// Serialization format for a rendered summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Csv,
    Json,
}

/// JSON document written for [`OutputFormat::Json`].
#[derive(Debug, Serialize)]
pub struct SummaryDocument {
    pub generated_at: DateTime<Utc>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Escapes text for use inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the summary as a striped, centered-header HTML table.
pub fn render_html(summary: &Summary) -> String {
    let mut html = String::new();

    html.push_str("<table border=\"0\" class=\"dataframe table table-striped table-sm\">\n");
    html.push_str("  <thead>\n    <tr style=\"text-align: center;\">\n");
    for column in summary.columns() {
        let _ = writeln!(html, "      <th>{}</th>", escape_html(&column));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for record in summary.records() {
        html.push_str("    <tr>\n");
        for cell in record {
            let _ = writeln!(html, "      <td>{}</td>", escape_html(&cell));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");

    html
}

/// Writes the summary as CSV: one header record, then one record per student.
pub fn write_csv<W: Write>(summary: &Summary, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(summary.columns())?;
    for record in summary.records() {
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Serializes the summary as pretty-printed JSON stamped with the current time.
pub fn to_json(summary: &Summary) -> Result<String> {
    let document = SummaryDocument {
        generated_at: Utc::now(),
        columns: summary.columns(),
        rows: summary.records(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Renders `summary` in `format` into `writer`.
pub fn write_summary<W: Write>(summary: &Summary, format: OutputFormat, mut writer: W) -> Result<()> {
    debug!(?format, rows = summary.rows.len(), "Writing summary");

    match format {
        OutputFormat::Html => {
            writer.write_all(render_html(summary).as_bytes())?;
            writer.write_all(b"\n")?;
        }
        OutputFormat::Csv => write_csv(summary, &mut writer)?,
        OutputFormat::Json => {
            writer.write_all(to_json(summary)?.as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;

    Ok(())
}
