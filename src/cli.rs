//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// userql - A minimal GraphQL API over an in-memory user list
#[derive(Parser, Debug)]
#[command(name = "userql")]
#[command(version)]
#[command(about = "A minimal GraphQL API over an in-memory user list", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print a sample configuration file, or write it to OUTPUT
    ConfigGen {
        /// Output file path (default: stdout)
        output: Option<String>,

        /// Overwrite OUTPUT if it already exists
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The command to run; no subcommand means `serve`
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
