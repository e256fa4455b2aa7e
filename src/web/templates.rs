//! Page templates for the upload form and the results table.

use crate::output::{escape_html, render_html};
use crate::summary::types::Summary;

const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Gradebook Summary</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<main class="container py-4">
"#;

const FOOT: &str = "</main>\n</body>\n</html>\n";

fn page(body: &str) -> String {
    let mut html = String::with_capacity(HEAD.len() + body.len() + FOOT.len());
    html.push_str(HEAD);
    html.push_str(body);
    html.push_str(FOOT);
    html
}

/// The upload form. The file field is named `csvfile`.
pub fn index_page() -> String {
    page(
        r#"<h1 class="h3 mb-3">Gradebook Summary</h1>
<p>Upload a gradebook CSV export to see each student's average per module.</p>
<form method="post" action="/" enctype="multipart/form-data">
  <div class="mb-3">
    <input class="form-control" type="file" name="csvfile" accept=".csv,text/csv">
  </div>
  <button class="btn btn-primary" type="submit">Summarize</button>
</form>
"#,
    )
}

/// The results page: the rendered summary table plus the list of column titles.
pub fn results_page(summary: &Summary) -> String {
    let titles = summary
        .columns()
        .iter()
        .map(|t| escape_html(t))
        .collect::<Vec<_>>()
        .join(", ");

    page(&format!(
        r#"<h1 class="h3 mb-3">Module Averages</h1>
<p class="text-muted small">{titles}</p>
<div class="table-responsive">
{table}
</div>
<a class="btn btn-secondary mt-3" href="/">Upload another file</a>
"#,
        table = render_html(summary),
    ))
}

/// Shown when an upload cannot be read as a table.
pub fn error_page(message: &str) -> String {
    page(&format!(
        r#"<h1 class="h3 mb-3">Could not read that file</h1>
<div class="alert alert-danger">{}</div>
<a class="btn btn-secondary" href="/">Try again</a>
"#,
        escape_html(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_has_upload_field() {
        let html = index_page();
        assert!(html.contains("name=\"csvfile\""));
        assert!(html.contains("multipart/form-data"));
    }

    #[test]
    fn test_results_page_embeds_table_and_titles() {
        let summary = Summary {
            modules: vec!["2".into()],
            rows: vec![],
        };
        let html = results_page(&summary);
        assert!(html.contains("Student, Module 2 Assignments, Module 2 Labs"));
        assert!(html.contains("<th>Module 2 Labs</th>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        assert!(error_page("<oops>").contains("&lt;oops&gt;"));
    }
}
