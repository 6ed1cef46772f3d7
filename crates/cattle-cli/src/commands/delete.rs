//! Delete command implementation.

use anyhow::{Context, Result};
use cattle_core::Dispatcher;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Type id, e.g. token
    pub type_name: String,

    /// Resource id
    pub id: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let dispatcher = config::connect().await?;
    let (_, existing) = super::fetch(&dispatcher, &args.type_name, &args.id).await?;

    dispatcher
        .delete(&args.type_name, &existing)
        .await
        .with_context(|| format!("Failed to delete {} {}", args.type_name, args.id))?;

    output::success(&format!("Deleted {} {}", args.type_name, args.id));
    Ok(())
}
