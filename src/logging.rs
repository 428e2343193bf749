//! Diagnostic logging through `tracing`, always written to stderr.
//!
//! Validation findings are results, not log events; they go to stdout via
//! the output formatters. Logs describe what the tool is doing.
//!
//! - `error`: fatal problems (always shown unless filtered by `RUST_LOG`)
//! - `warn`: default level
//! - `info`: template and input file summaries (`-v`)
//! - `debug`: stage progress and counts (`-vv`)
//! - `trace`: per-row detail (`-vvv`)

use std::io;
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line format.
    #[default]
    Pretty,
    /// JSON lines for machine parsing.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
    pub with_target: bool,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            with_target: false,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Build a config from the CLI `-v` count and `--quiet` flag.
    ///
    /// `--quiet` wins over any verbosity and keeps only errors.
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub const fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }
}

/// Install the global subscriber writing to stderr.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    init_logging_with_writer(config, io::stderr)
}

/// Install the global subscriber with a custom writer.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .compact()
                .without_time()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    }
}

/// Default directive for the given level. Other crates stay at `warn`.
pub(crate) fn default_directive(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,csv_guard={level}")
}

/// `RUST_LOG` overrides the configured level when set and valid.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
