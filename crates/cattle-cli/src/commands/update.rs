//! Update command implementation.

use anyhow::{Context, Result};
use cattle_core::Dispatcher;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Type id, e.g. setting
    pub type_name: String,

    /// Resource id
    pub id: String,

    /// JSON file with the fields to change (use - for stdin)
    #[arg(long)]
    pub json: String,

    /// Send the body as a full replacement instead of a partial update
    #[arg(long)]
    pub replace: bool,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let body = super::read_json(&args.json)?;

    let dispatcher = config::connect().await?;
    let (_, existing) = super::fetch(&dispatcher, &args.type_name, &args.id).await?;

    let updated = if args.replace {
        dispatcher.replace(&args.type_name, &existing, body).await
    } else {
        dispatcher.update(&args.type_name, &existing, body).await
    }
    .with_context(|| format!("Failed to update {} {}", args.type_name, args.id))?;

    output::json_pretty(&updated)
}
