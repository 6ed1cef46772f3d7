//! Login command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use cattle_http::HttpDispatcher;
use cattle_mgmt::Client;
use clap::Args;
use colored::Colorize;
use tracing::debug;

use crate::config::{StoredConfig, storage};
use crate::output;

/// Setting whose value is the server's release.
const SERVER_VERSION_SETTING: &str = "server-version";

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// API base URL, e.g. https://rancher.example.com/v3
    #[arg(long)]
    pub url: String,

    /// Bearer token
    #[arg(long, conflicts_with_all = ["access_key", "secret_key"])]
    pub token: Option<String>,

    /// API access key (used with --secret-key)
    #[arg(long, requires = "secret_key")]
    pub access_key: Option<String>,

    /// API secret key (used with --access-key)
    #[arg(long, requires = "access_key")]
    pub secret_key: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let config = StoredConfig {
        url: args.url,
        token: args.token,
        access_key: args.access_key,
        secret_key: args.secret_key,
        insecure: args.insecure,
    };

    eprintln!("{}", "Connecting...".dimmed());

    let dispatcher = HttpDispatcher::connect(config.to_opts()?)
        .await
        .context("Failed to login")?;
    let dispatcher = Arc::new(dispatcher);
    let schemas = dispatcher.schemas();

    let client = Client::with_dispatcher(dispatcher.clone());
    let server_version = match client.setting.by_id(SERVER_VERSION_SETTING).await {
        Ok(setting) => setting.effective_value().map(str::to_string),
        Err(e) => {
            debug!(error = %e, "server version not readable");
            None
        }
    };

    let path = storage::save_config(&config).context("Failed to save configuration")?;

    output::success("Logged in successfully");
    output::field("URL", dispatcher.url().as_str());
    output::field("Auth", config.auth_kind());
    output::field("Schemas", &schemas.len().to_string());
    if let Some(version) = server_version {
        output::field("Server version", &version);
    }
    output::field("Config", &path.display().to_string());

    Ok(())
}
