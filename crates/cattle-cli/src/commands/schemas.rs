//! Schemas command implementation.

use anyhow::Result;
use cattle_core::ApiSchema;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Print every schema as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SchemasArgs) -> Result<()> {
    let dispatcher = config::connect().await?;
    let schemas = dispatcher.schemas();

    for schema in schemas.iter() {
        if args.json {
            output::json(schema)?;
        } else {
            println!("{:<40} {}", schema.id, capabilities(schema));
        }
    }

    Ok(())
}

/// One-line summary of what a type supports.
fn capabilities(schema: &ApiSchema) -> String {
    let mut caps: Vec<String> = [
        ("list", schema.listable()),
        ("create", schema.creatable()),
        ("update", schema.updatable()),
        ("delete", schema.deletable()),
    ]
    .into_iter()
    .filter(|(_, allowed)| *allowed)
    .map(|(name, _)| name.to_string())
    .collect();

    if !schema.resource_actions.is_empty() {
        let actions: Vec<&str> = schema.resource_actions.keys().map(String::as_str).collect();
        caps.push(format!("actions: {}", actions.join(",")));
    }

    if !schema.collection_actions.is_empty() {
        let actions: Vec<&str> = schema.collection_actions.keys().map(String::as_str).collect();
        caps.push(format!("collection actions: {}", actions.join(",")));
    }

    if caps.is_empty() {
        "-".to_string()
    } else {
        caps.join("  ")
    }
}
