//! Persisted connection settings.

pub mod storage;
mod types;

use anyhow::{Context, Result};
use cattle_http::HttpDispatcher;

pub use types::StoredConfig;

/// Environment variable overriding the stored server URL.
pub const URL_ENV: &str = "CATTLE_URL";

/// Environment variable overriding the stored credentials with a token.
pub const TOKEN_ENV: &str = "CATTLE_TOKEN";

/// Stored configuration with environment overrides applied.
pub fn resolve() -> Result<StoredConfig> {
    let stored = storage::load_config().context("Failed to load configuration")?;

    let url = std::env::var(URL_ENV).ok().filter(|v| !v.is_empty());
    let token = std::env::var(TOKEN_ENV).ok().filter(|v| !v.is_empty());

    types::apply_overrides(stored, url, token)
        .context("No configuration found. Run 'cattle login' first or set CATTLE_URL.")
}

/// Connect to the configured server.
pub async fn connect() -> Result<HttpDispatcher> {
    let config = resolve()?;
    let opts = config.to_opts()?;

    HttpDispatcher::connect(opts)
        .await
        .with_context(|| format!("Failed to connect to {}", config.url))
}
