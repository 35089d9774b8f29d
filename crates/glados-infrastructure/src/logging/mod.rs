//! Logging setup for the check-in run.
//!
//! - Human-readable lines on stdout (what a CI job log shows)
//! - Optional one-line JSON records in a daily-rotated file
//! - `log` facade records forwarded into `tracing`
//!
//! Both outputs honour `RUST_LOG`.

use log::LevelFilter;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "glados-checkin.log";

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(std::io::stdout().is_terminal())
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_filter(stdout_filter());

    let json_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true)
                    .with_timer(fmt::time::ChronoLocal::new(
                        "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(),
                    ))
                    .with_filter(file_filter()),
            )
        }
        None => None,
    };

    let subscriber = Registry::default().with(stdout_layer).with(json_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::debug!(
        target: "glados::logging",
        log_dir = ?log_dir.map(|dir| dir.display().to_string()),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

fn stdout_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn file_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,glados_infrastructure=debug,glados_app=debug"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent_and_creates_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("logs");

        init_logger(Some(&dir)).unwrap();
        init_logger(None).unwrap();

        assert!(dir.is_dir());
    }
}
