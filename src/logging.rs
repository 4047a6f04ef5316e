//! Logger setup for the binary.
//!
//! Logs always go to stderr so they never mix with box output on stdout.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::LevelFilter;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Resolve the effective log spec.
///
/// Without `-v` flags the configured spec is used as-is. Each `-v` raises the
/// spec's default level by one step (capped at trace); module directives such
/// as `star_boxes::overlap=trace` are kept unchanged. A spec without a default
/// level is treated as `off`.
pub fn log_spec(configured: &str, verbosity: u8) -> String {
    if verbosity == 0 {
        return configured.to_string();
    }

    let mut base = None;
    let mut directives = Vec::new();
    for item in configured.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if base.is_none() && !item.contains('=') {
            if let Ok(level) = item.parse::<LevelFilter>() {
                base = Some(level);
                continue;
            }
        }
        directives.push(item);
    }

    let raised = raise(base.unwrap_or(LevelFilter::Off), verbosity);
    let mut spec = raised.as_str().to_lowercase();
    for directive in directives {
        spec.push_str(", ");
        spec.push_str(directive);
    }
    spec
}

fn raise(level: LevelFilter, steps: u8) -> LevelFilter {
    let index = LEVELS.iter().position(|l| *l == level).unwrap_or(0);
    LEVELS[(index + steps as usize).min(LEVELS.len() - 1)]
}

/// Start logging to stderr. The returned handle must be kept alive.
pub fn init_logging(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(spec)?.log_to_stderr().start()
}
