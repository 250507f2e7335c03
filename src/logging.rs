use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application (default: INFO)
    pub level: Level,
    /// Whether to use json format for logs (default: false)
    pub json_format: bool,
    /// Path to store log files. If None, logs only go to stdout
    pub log_dir: Option<String>,
    /// Whether to colorize terminal output (default: true)
    pub colorize: bool,
    /// Log file name to use if log_dir is specified
    pub log_file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_dir: None,
            colorize: true,
            log_file_name: "historymind-relay".to_string(),
        }
    }
}

/// Keeps the file appender worker thread alive; hold it for the lifetime of
/// the process.
#[allow(dead_code)]
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize tracing with a console layer and an optional daily-rolling file
/// layer. `log` records (actix's request logger) are forwarded into tracing.
pub fn init_logging(config: LoggingConfig) -> LogGuard {
    // Ignore errors so repeated initialization in tests is harmless.
    let _ = LogTracer::init();

    let level_filter = match config.level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "historymind_relay={},actix_web={}",
            level_filter, level_filter
        ))
    });

    let time_format = "%Y-%m-%d %H:%M:%S".to_string();

    let mut layers = Vec::new();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_ansi(config.colorize)
        .with_timer(ChronoUtc::new(time_format.clone()));
    let stdout_layer = if config.json_format {
        stdout_layer.json().flatten_event(true).boxed()
    } else {
        stdout_layer.boxed()
    };
    layers.push(stdout_layer);

    let mut file_guard = None;
    if let Some(log_dir) = &config.log_dir {
        let log_dir = PathBuf::from(log_dir);
        if !log_dir.exists()
            && let Err(e) = std::fs::create_dir_all(&log_dir)
        {
            eprintln!("Failed to create log directory: {}", e);
            return LogGuard { _file_guard: None };
        }

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, log_dir, config.log_file_name.clone());
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_timer(ChronoUtc::new(time_format))
            .with_writer(non_blocking);
        let file_layer = if config.json_format {
            file_layer.json().flatten_event(true).boxed()
        } else {
            file_layer.boxed()
        };
        layers.push(file_layer);
    }

    // try_init so a second subscriber (e.g. in tests) does not panic.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init();

    LogGuard {
        _file_guard: file_guard,
    }
}
