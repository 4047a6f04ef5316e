//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Find the largest non-overlapping bounding boxes around clusters of stars in a grid
#[derive(Parser, Debug)]
#[command(name = "star-boxes")]
#[command(version, about = "Bounding boxes around star clusters in a character grid", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read the grid from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Marker character (default: from config, or '*')
    #[arg(short, long)]
    pub marker: Option<char>,

    /// Output format (default: from config, or text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
