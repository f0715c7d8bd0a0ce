//! Log subscriber setup for the command-line front end.
//!
//! The library only emits `tracing` events; the binary installs the
//! subscriber once through `init_logging`. The level names follow the usual
//! `NOTSET..CRITICAL` scale, and `CHESS_ARBITER_LOG` overrides the level with
//! a full filter directive when set.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::errors::{InputError, InputResult};

pub const LOG_ENV_VAR: &str = "CHESS_ARBITER_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    #[value(name = "NOTSET")]
    NotSet,
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[default]
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// `NOTSET` lets everything through; `CRITICAL` has no stricter tracing
    /// level and maps to errors only.
    pub const fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::NotSet => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

/// Local wall-clock timestamps such as `2024-05-01 13:37:00,042`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTimestamp;

impl FormatTime for LogTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

/// Installs the global subscriber. Logs go to `log_file` (truncated) when
/// given, otherwise to stderr so stdout stays reserved for the state.
pub fn init_logging(level: LogLevel, log_file: Option<&Path>) -> InputResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter().to_string()));

    let (writer, ansi) = match log_file {
        Some(path) => (BoxMakeWriter::new(Mutex::new(File::create(path)?)), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_timer(LogTimestamp)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|err| InputError::LoggerInstall(err.to_string()))
}
