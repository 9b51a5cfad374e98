//! CLI interface for book-ladder
//!
//! Provides subcommands for:
//! - `watch`: Subscribe to the aggregator and draw the ladder
//! - `config`: Show the effective configuration

mod watch;

pub use watch::WatchArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "book-ladder")]
#[command(about = "Terminal viewer for a consolidated multi-venue order book")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Subscribe to the aggregator and draw the merged ladder
    Watch(WatchArgs),
    /// Show the effective configuration
    Config,
}
