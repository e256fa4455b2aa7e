//! Runtime settings read from the environment (after `.env` is loaded).
//!
//! Settings every command needs live in [`Settings`]; the web host's own
//! settings live in [`ServerSettings`] and are only read by `serve`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/gradebook_summary.log";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_file_path: PathBuf,
}

impl Settings {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `LOG_FILE_PATH` through `lookup`, defaulting to
    /// `logs/gradebook_summary.log`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_file_path = lookup("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_PATH));

        Self { log_file_path }
    }
}

/// Settings for the web host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl ServerSettings {
    /// Reads server settings from process environment variables, with
    /// `bind_flag` (the `--bind` value) taking precedence over `GRADEBOOK_BIND`.
    pub fn from_env(bind_flag: Option<&str>) -> Result<Self> {
        Self::from_lookup(bind_flag, |key| std::env::var(key).ok())
    }

    /// Reads server settings through `lookup`, falling back to defaults for
    /// unset keys. `GRADEBOOK_BIND` is not consulted when `bind_flag` is set.
    ///
    /// | Variable                     | Default        |
    /// |------------------------------|----------------|
    /// | `GRADEBOOK_BIND`             | `0.0.0.0:5000` |
    /// | `GRADEBOOK_MAX_UPLOAD_BYTES` | 16 MiB         |
    pub fn from_lookup(
        bind_flag: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let bind_addr = resolve_bind(bind_flag, &lookup)?;

        let max_upload_bytes = match lookup("GRADEBOOK_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("GRADEBOOK_MAX_UPLOAD_BYTES is not a byte count: '{raw}'")
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            bind_addr,
            max_upload_bytes,
        })
    }
}

fn resolve_bind(
    bind_flag: Option<&str>,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<SocketAddr> {
    if let Some(bind) = bind_flag {
        return bind
            .parse::<SocketAddr>()
            .with_context(|| format!("--bind is not a socket address: '{bind}'"));
    }

    let bind = lookup("GRADEBOOK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
    bind.parse::<SocketAddr>()
        .with_context(|| format!("GRADEBOOK_BIND is not a socket address: '{bind}'"))
}
