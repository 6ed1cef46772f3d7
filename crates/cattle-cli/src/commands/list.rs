//! List command implementation.

use anyhow::{Context, Result};
use cattle_core::client::drain_pages;
use cattle_core::{Collection, Dispatcher, ListOpts};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Type id, e.g. cluster
    pub type_name: String,

    /// Filter as key=value (repeatable), e.g. --filter state=active
    #[arg(long = "filter", short = 'f', value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Maximum number of items per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pagination marker to start from
    #[arg(long)]
    pub marker: Option<String>,

    /// Follow pagination until every page has been fetched
    #[arg(long)]
    pub all: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ListArgs {
    fn opts(&self) -> ListOpts {
        let mut opts = self
            .filters
            .iter()
            .fold(ListOpts::new(), |opts, (key, value)| opts.filter(key, value));
        if let Some(limit) = self.limit {
            opts = opts.limit(limit);
        }
        if let Some(marker) = &self.marker {
            opts = opts.marker(marker);
        }
        opts
    }
}

pub async fn run(args: ListArgs) -> Result<()> {
    let dispatcher = config::connect().await?;

    let value = dispatcher
        .list(&args.type_name, &args.opts())
        .await
        .with_context(|| format!("Failed to list {}", args.type_name))?;
    let first: Collection<Value> =
        serde_json::from_value(value).context("Server returned a malformed collection")?;

    if !args.all {
        print_items(&first, args.pretty)?;
        if let Some(next) = first.next_link() {
            eprintln!();
            eprintln!("{}: {}", "Next page".dimmed(), next);
        }
        return Ok(());
    }

    match drain_pages(&dispatcher, first).await {
        Ok(all) => print_items(&all, args.pretty),
        Err(partial) => {
            let (collected, source) = partial.into_parts();
            print_items(&collected, args.pretty)?;
            Err(source).with_context(|| {
                format!(
                    "Listing stopped after {} {} items",
                    collected.len(),
                    args.type_name
                )
            })
        }
    }
}

fn print_items(collection: &Collection<Value>, pretty: bool) -> Result<()> {
    if collection.is_empty() {
        eprintln!("{}", "No resources found.".dimmed());
        return Ok(());
    }

    for item in collection.iter() {
        if pretty {
            output::json_pretty(item)?;
        } else {
            output::json(item)?;
        }
    }
    Ok(())
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filters() {
        assert_eq!(
            parse_filter("name_ne=local"),
            Ok(("name_ne".to_string(), "local".to_string()))
        );
        assert_eq!(
            parse_filter("labels=a=b"),
            Ok(("labels".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_filter("state="), Ok(("state".to_string(), String::new())));
        assert!(parse_filter("state").is_err());
        assert!(parse_filter("=active").is_err());
    }

    #[test]
    fn builds_list_opts() {
        let args = ListArgs {
            type_name: "cluster".into(),
            filters: vec![("state".into(), "active".into())],
            limit: Some(10),
            marker: None,
            all: false,
            pretty: false,
        };
        let opts = args.opts();

        assert_eq!(opts.get("state"), Some("active"));
        assert_eq!(opts.get("limit"), Some("10"));
        assert_eq!(opts.get("marker"), None);
    }
}
