//! Subcommand implementations.

mod action;
mod create;
mod delete;
mod get;
mod list;
mod login;
mod logout;
mod schemas;
mod update;
mod wait;

use std::io::{self, Read};

use anyhow::{Context, Result};
use cattle_core::{Dispatcher, ResourceBase};
use clap::Subcommand;
use serde::Deserialize;
use serde_json::Value;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a server connection and store it
    Login(login::LoginArgs),

    /// Forget the stored connection
    Logout(logout::LogoutArgs),

    /// List the types the server publishes
    Schemas(schemas::SchemasArgs),

    /// List resources of a type
    List(list::ListArgs),

    /// Fetch a single resource
    Get(get::GetArgs),

    /// Create a resource
    Create(create::CreateArgs),

    /// Apply a partial update to a resource
    Update(update::UpdateArgs),

    /// Delete a resource
    Delete(delete::DeleteArgs),

    /// Invoke a named action on a resource
    Action(action::ActionArgs),

    /// Wait for a resource to finish transitioning
    Wait(wait::WaitArgs),
}

pub async fn handle(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
        Commands::Schemas(args) => schemas::run(args).await,
        Commands::List(args) => list::run(args).await,
        Commands::Get(args) => get::run(args).await,
        Commands::Create(args) => create::run(args).await,
        Commands::Update(args) => update::run(args).await,
        Commands::Delete(args) => delete::run(args).await,
        Commands::Action(args) => action::run(args).await,
        Commands::Wait(args) => wait::run(args).await,
    }
}

/// Read a JSON document from a file, or from stdin when `path` is `-`.
fn read_json(path: &str) -> Result<Value> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        serde_json::from_str(&buf).context("Invalid JSON from stdin")
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file {path}"))?;
        serde_json::from_str(&content).context("Invalid JSON in file")
    }
}

/// Fetch a resource and split out its identity and links.
async fn fetch(
    dispatcher: &dyn Dispatcher,
    type_name: &str,
    id: &str,
) -> Result<(Value, ResourceBase)> {
    let value = dispatcher
        .by_id(type_name, id)
        .await
        .with_context(|| format!("Failed to fetch {type_name} {id}"))?;
    let base = ResourceBase::deserialize(&value)
        .with_context(|| format!("Server returned a malformed {type_name}"))?;
    Ok((value, base))
}
