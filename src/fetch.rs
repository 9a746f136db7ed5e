//! Reads dataset bytes from a local file or over HTTP.

use anyhow::{Context, Result};
use tracing::debug;

/// Returns `true` when `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches the body at `url` with a blocking GET.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

/// Loads raw bytes from a local file path or fetches them over HTTP.
#[tracing::instrument(skip_all, fields(source = %source))]
pub fn read_source(source: &str) -> Result<Vec<u8>> {
    let bytes = if is_remote(source) {
        fetch_bytes(source).with_context(|| format!("failed to fetch {source}"))?
    } else {
        std::fs::read(source).with_context(|| format!("failed to read {source}"))?
    };
    debug!(bytes = bytes.len(), "Source bytes loaded");
    Ok(bytes)
}
