//! Action command implementation.

use anyhow::{Context, Result};
use cattle_core::Dispatcher;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ActionArgs {
    /// Type id, e.g. cluster
    pub type_name: String,

    /// Resource id
    pub id: String,

    /// Action name, e.g. generateKubeconfig
    pub action: String,

    /// JSON file with the action input (use - for stdin)
    #[arg(long)]
    pub json: Option<String>,
}

pub async fn run(args: ActionArgs) -> Result<()> {
    let input = args.json.as_deref().map(super::read_json).transpose()?;

    let dispatcher = config::connect().await?;
    let (_, existing) = super::fetch(&dispatcher, &args.type_name, &args.id).await?;

    let result = dispatcher
        .action(&args.type_name, &args.action, &existing, input)
        .await
        .with_context(|| {
            format!(
                "Action {} failed on {} {}",
                args.action, args.type_name, args.id
            )
        })?;

    if !result.is_null() {
        output::json_pretty(&result)?;
    }
    output::success(&format!("Ran {} on {} {}", args.action, args.type_name, args.id));

    Ok(())
}

