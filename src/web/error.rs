use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::warn;

use crate::web::templates;

/// Ways an upload request can fail before or while summarizing.
#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    /// The form arrived without a `csvfile` file part.
    #[error("no file was uploaded")]
    NoFile,
    /// The multipart body could not be read (including oversized bodies).
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    /// The file is not a readable CSV table.
    #[error("the uploaded file could not be read as CSV: {0}")]
    Unreadable(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            // Send the browser back to the form to try again.
            UploadError::NoFile => Redirect::to("/").into_response(),
            UploadError::Multipart(err) => {
                warn!(error = %err, "Malformed upload body");
                (err.status(), err.body_text()).into_response()
            }
            UploadError::Unreadable(message) => {
                warn!(error = %message, "Unreadable gradebook upload");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Html(templates::error_page(&message)),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_redirects_to_form() {
        let response = UploadError::NoFile.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }

    #[test]
    fn test_unreadable_is_unprocessable() {
        let response = UploadError::Unreadable("no columns found".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
