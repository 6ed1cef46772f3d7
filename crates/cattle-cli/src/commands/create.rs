//! Create command implementation.

use anyhow::{Context, Result};
use cattle_core::{Dispatcher, ResourceBase};
use clap::Args;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Type id, e.g. catalog
    pub type_name: String,

    /// JSON file with the resource body (use - for stdin)
    #[arg(long)]
    pub json: Option<String>,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let payload = match args.json.as_deref() {
        Some(path) => super::read_json(path)?,
        None => Value::Object(Map::new()),
    };

    let dispatcher = config::connect().await?;

    let created = dispatcher
        .create(&args.type_name, payload)
        .await
        .with_context(|| format!("Failed to create {}", args.type_name))?;

    output::json_pretty(&created)?;
    if let Some(id) = ResourceBase::deserialize(&created).ok().and_then(|b| b.id) {
        output::success(&format!("Created {} {}", args.type_name, id));
    }

    Ok(())
}
