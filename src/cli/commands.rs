//! Command handlers: the default grid run and config actions.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use crate::config::{self, Config, ConfigError};
use crate::input::{self, InputError};
use crate::output::{self, OutputFormat};
use crate::pipeline::Pipeline;

/// Errors surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),
}

/// Effective settings after merging CLI args over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub marker: char,
    pub format: OutputFormat,
    pub log_spec: String,
}

impl Settings {
    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(args: &Args, cfg: &Config) -> Result<Self, ConfigError> {
        let marker = match args.marker {
            Some(m) => m,
            None => cfg.marker()?,
        };
        let format = args.format.unwrap_or(cfg.output.format);
        let log_spec = crate::logging::log_spec(&cfg.log.level, args.verbose);
        Ok(Self {
            marker,
            format,
            log_spec,
        })
    }
}

/// Load the config file. An explicit `--config` path must exist; the default
/// path falls back to built-in defaults when missing.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from_explicit(path),
        None => Config::load(),
    }
}

/// Read the grid, run the pipeline and write the selected boxes to `out`.
pub fn run_grid<W: Write>(
    input_path: Option<&Path>,
    settings: &Settings,
    out: &mut W,
) -> Result<(), CliError> {
    let source = input::open_source(input_path)?;
    let lines = input::read_lines(source)?;

    let report = Pipeline::new(settings.marker).run(&lines);
    log::info!(
        "{} star(s), {} component(s), {} after overlap elimination, {} selected",
        report.stars,
        report.components,
        report.survivors,
        report.boxes.len()
    );

    output::write_report(out, &report, settings.format)?;
    out.flush()?;
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
    settings: &Settings,
) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Marker: {:?}", settings.marker);
            println!("  Format: {}", settings.format.name());
            println!("  Log level: {}", settings.log_spec);
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            write_default_config(&path)?;
            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}

/// Write the commented default config, refusing to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, config::DEFAULT_CONFIG)?;
    log::info!("wrote default config to {}", path.display());
    Ok(())
}
