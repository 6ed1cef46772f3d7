//! Get command implementation.

use anyhow::Result;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Type id, e.g. cluster
    pub type_name: String,

    /// Resource id
    pub id: String,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let dispatcher = config::connect().await?;

    let (value, _) = super::fetch(&dispatcher, &args.type_name, &args.id).await?;
    output::json_pretty(&value)
}
