//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::config::storage;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    if storage::clear_config()? {
        output::success("Removed stored configuration");
    } else {
        output::warning("No stored configuration");
    }
    Ok(())
}
