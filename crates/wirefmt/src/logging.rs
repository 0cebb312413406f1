//! Stderr logging for the CLI.
//!
//! Stdout carries command output only, so frames written with
//! `--format raw` stay byte-exact when piped.

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Logging settings taken from the global CLI flags.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogOptions {
    /// Install the global subscriber. Returns false if one was already set.
    pub fn init(self) -> bool {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(LevelFilter::from(self.level))
            .with_ansi(false)
            .with_target(false);

        let installed = match self.format {
            LogFormat::Text => builder.try_init(),
            // Event fields sit at the top level so `error` and `input_len`
            // can be read straight off each line.
            LogFormat::Json => builder.json().flatten_event(true).try_init(),
        };
        installed.is_ok()
    }
}
