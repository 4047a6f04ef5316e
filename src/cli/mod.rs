//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, settings resolution, and
//! subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction};
pub use commands::{
    handle_config_action, load_config, run_grid, write_default_config, CliError, Settings,
};
