use super::commands::AuthCommands;
use super::commands::SearchCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graph-search-cli")]
#[command(about = "A CLI tool for managing Microsoft Search through Microsoft Graph")]
#[command(version)]
pub struct Cli {
    /// Environment name to use (overrides current environment)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Log progress information
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log debug information, including HTTP traffic
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authentication management
    Auth(AuthCommands),
    /// Microsoft Search management
    Search(SearchCommands),
}

impl Cli {
    /// Log filter implied by the verbosity flags, if any
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.debug {
            Some(log::LevelFilter::Debug)
        } else if self.verbose {
            Some(log::LevelFilter::Info)
        } else {
            None
        }
    }
}
