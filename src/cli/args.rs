//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find unwrapped text under a directory and write the report file
//! - `init`: Initialize unwrapt configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory to search for source files
    pub path: Option<PathBuf>,

    /// Report file path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print every finding with its location
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find text that is not wrapped in a t() call and write it to a report
    Scan(ScanCommand),
    /// Initialize a new .unwraptrc.json configuration file
    Init,
}
