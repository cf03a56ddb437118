//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so that stdout stays machine-readable for
//! `--output json`.
//!
//! # Log Levels
//!
//! - `warn`: configuration fallbacks (unknown preset, skipped label). Default.
//! - `info`: per-command progress (`-v`)
//! - `debug`: per-statement decisions in the validator and layout (`-vv`)
//! - `trace`: pictogram suppression steps (`-vvv`)

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Single-line output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Configuration for logging behaviour.
#[derive(Debug, Clone)]
pub(crate) struct LogConfig {
    /// Maximum level for the hazlabel crates.
    pub(crate) level: Level,
    /// Output format.
    pub(crate) format: LogFormat,
    /// Whether to use ANSI colours.
    pub(crate) with_ansi: bool,
}

impl LogConfig {
    /// Map a `-v` count to a level: none is `warn`, then `info`, `debug`,
    /// `trace`.
    pub(crate) fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            format: LogFormat::default(),
            with_ansi: false,
        }
    }

    pub(crate) fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub(crate) fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber. Call once, before any command runs.
pub(crate) fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config.level);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr).with_target(true))
            .init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_ansi(config.with_ansi)
                    .without_time(),
            )
            .init(),
    }
}

/// `RUST_LOG` wins when set; otherwise our crates log at `level` and
/// everything else at `warn`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!(
            "warn,hazlabel={level},hazlabel_core={level},hazlabel_format={level},\
             hazlabel_registry={level}"
        ))
    })
}
