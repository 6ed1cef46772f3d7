//! Wait command implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use cattle_core::DEFAULT_WAIT_TIMEOUT;
use cattle_core::client::wait::wait_success;
use clap::Args;
use colored::Colorize;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct WaitArgs {
    /// Type id, e.g. cluster
    pub type_name: String,

    /// Resource id
    pub id: String,

    /// Give up after this many seconds
    #[arg(long, default_value_t = DEFAULT_WAIT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

pub async fn run(args: WaitArgs) -> Result<()> {
    let dispatcher = config::connect().await?;

    eprintln!(
        "{}",
        format!("Waiting for {} {}...", args.type_name, args.id).dimmed()
    );

    let settled = wait_success(
        &dispatcher,
        &args.type_name,
        &args.id,
        Duration::from_secs(args.timeout),
    )
    .await
    .with_context(|| format!("{} {} did not settle", args.type_name, args.id))?;

    let state = settled
        .get("state")
        .and_then(|s| s.as_str())
        .unwrap_or("unknown");
    output::success(&format!("{} {} is {}", args.type_name, args.id, state));

    Ok(())
}
