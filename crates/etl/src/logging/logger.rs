use std::path::PathBuf;

use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// File name of the current log file inside `write_path`
pub const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A global subscriber is already installed")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Configuration for logging initialization
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
            write_to_file: config.write,
            write_path: &config.write_path,
            write_max_file_size: config.write_max_file_size,
            write_max_files: config.write_max_files,
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Console layer. Writes to stderr: stdout may carry exported records.
fn console_layer(json_format: bool, strip_ansi: bool) -> BoxedLayer {
    if json_format {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!strip_ansi)
            .with_writer(std::io::stderr)
            .boxed()
    }
}

fn file_layer(config: &LoggingConfig<'_>) -> Result<(BoxedLayer, WorkerGuard), LoggingError> {
    std::fs::create_dir_all(config.write_path)?;

    // write_max_files counts the current file: 5 means logs.log + logs.log.{1..4}
    let appender = BasicRollingFileAppender::new(
        PathBuf::from(config.write_path).join(LOG_FILE_NAME),
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        config.write_max_files.saturating_sub(1),
    )?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = if config.json_format {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    };
    Ok((layer, guard))
}

/// Installs the global subscriber.
///
/// When file output is enabled the returned guard flushes the non-blocking
/// writer on drop; hold it for the lifetime of the process.
///
/// # Log Rotation
/// When the log file reaches `write_max_file_size` it is rotated to
/// `logs.log.1`, `logs.log.2` and so on, keeping `write_max_files` files in
/// total.
pub fn init_with_config(config: LoggingConfig<'_>) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = env_filter(config.level)?;

    let mut layers = vec![console_layer(config.json_format, config.strip_ansi)];
    let guard = if config.write_to_file {
        let (layer, guard) = file_layer(&config)?;
        layers.push(layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(guard)
}
