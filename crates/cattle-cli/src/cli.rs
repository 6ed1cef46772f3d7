//! CLI argument definitions.

use clap::Parser;

use crate::commands::Commands;

/// Explore a cluster-management v3 API from the command line.
#[derive(Parser, Debug)]
#[command(name = "cattle")]
#[command(author, version = env!("CATTLE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}
