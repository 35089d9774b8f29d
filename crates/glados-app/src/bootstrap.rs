use anyhow::{Context, Result};
use std::sync::Arc;

use glados_infrastructure::http::GladosClient;

use crate::application::config::AppConfig;
use crate::application::services::{CheckInRunner, NotificationService, RunOutcome};

/// Wire the production client and notifier from configuration
pub fn build_runner(config: &AppConfig) -> Result<CheckInRunner> {
    let gateway = GladosClient::new(config.endpoints.clone())
        .context("Failed to build GLaDOS client")?;
    let notifier = NotificationService::pushdeer(&config.send_key, &config.pushdeer_server);

    Ok(CheckInRunner::new(Arc::new(gateway), notifier))
}

/// Run one complete check-in pass with the given configuration
pub async fn run(config: &AppConfig) -> Result<RunOutcome> {
    let runner = build_runner(config)?;
    Ok(runner.run(config.cookies.as_deref()).await)
}
