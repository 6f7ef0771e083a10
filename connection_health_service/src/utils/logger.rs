use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::Layer as FmtLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Setup logger configuration for the health check
///
/// If LOG_INSIDE_FILE=true:
/// - Console output for all log levels
/// - A daily rotated log file under .logs/
///
/// If LOG_INSIDE_FILE=false (default):
/// - Only console output for all log levels
pub fn setup_logger() -> Result<()> {
    let log_inside_file: bool = std::env::var("LOG_INSIDE_FILE")
        .unwrap_or("false".to_string())
        .parse()
        .unwrap_or(false);

    // Set default log level to INFO if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = FmtLayer::new()
        .with_line_number(false)
        .with_target(false)
        .with_thread_ids(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if log_inside_file {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("health")
            .build(".logs")
            .context("Failed to create log file appender")?;

        let file_layer = FmtLayer::new()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_thread_ids(false);

        registry.with(file_layer).init();
    } else {
        registry.init();
    }

    Ok(())
}
