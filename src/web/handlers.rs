use axum::Json;
use axum::extract::Multipart;
use axum::response::Html;
use bytes::Bytes;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::parser::parse_table;
use crate::summary::summarize;
use crate::web::error::UploadError;
use crate::web::templates;

/// Name of the multipart field carrying the gradebook.
pub const FILE_FIELD: &str = "csvfile";

/// An uploaded gradebook file.
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub data: Bytes,
}

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "gradebook_summary"
    }))
}

/// Summarizes one uploaded gradebook and returns the results page.
pub async fn upload(mut multipart: Multipart) -> Result<Html<String>, UploadError> {
    let upload = read_upload(&mut multipart).await?;
    info!(file = %upload.file_name, bytes = upload.data.len(), "Gradebook uploaded");

    let table =
        parse_table(&upload.data).map_err(|e| UploadError::Unreadable(format!("{e:#}")))?;
    let summary = summarize(&table);

    info!(
        students = summary.rows.len(),
        modules = summary.modules.len(),
        "Gradebook summarized"
    );

    Ok(Html(templates::results_page(&summary)))
}

/// Pulls the `csvfile` part out of the form. A part without a filename counts
/// as no file, matching a browser form submitted with nothing selected.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(field = ?field.name(), "Ignoring form field");
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        if file_name.is_empty() {
            return Err(UploadError::NoFile);
        }
        return Ok(Upload { file_name, data });
    }

    Err(UploadError::NoFile)
}
