use std::process::ExitCode;

use glados_app::application::config::log_dir_from_env;
use glados_app::{bootstrap, AppConfig};
use glados_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> ExitCode {
    let log_dir = log_dir_from_env();
    if let Err(e) = init_logger(log_dir.as_deref()) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
        eprintln!("   Falling back to console logging only");

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .with_line_number(true)
            .try_init();
    }

    tracing::info!("🚀 GLaDOS check-in starting...");

    let config = AppConfig::from_env();

    match bootstrap::run(&config).await {
        Ok(outcome) => {
            tracing::info!(exit_status = outcome.exit_status(), "✅ Check-in run finished");
            outcome.exit_code()
        }
        Err(e) => {
            tracing::error!("❌ Failed to start check-in run: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
