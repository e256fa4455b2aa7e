//! Loading gradebook exports from disk or over HTTP.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Downloads `url` and returns the response body.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the request fails, or the server
/// answers with a non-success status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        return Err(anyhow!("GET {} returned status {}", url, resp.status()));
    }
    Ok(resp.bytes().await?.to_vec())
}

/// Reads a gradebook from a local path, or fetches it when `source` is an
/// `http`/`https` URL.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn read_source(source: &str) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        let client = BasicClient::new()?;
        fetch_bytes(&client, source).await?
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("reading {source}"))?
    };
    debug!(bytes = bytes.len(), "Gradebook source loaded");
    Ok(bytes)
}
