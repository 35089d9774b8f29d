use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, instrument};

use glados_domain::check_in::{split_credentials, CheckInGateway, Credential, RunSummary};

use super::notification_service::NotificationService;

pub const NO_COOKIES_TITLE: &str = "Glados 签到失败";
pub const NO_COOKIES_CONTENT: &str = "未找到 COOKIES!";

/// Result of one pass over the configured accounts
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(RunSummary),
    NoCredentials,
}

impl RunOutcome {
    /// Process status: 0 even when every account failed, 1 without credentials
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::Completed(_) => 0,
            RunOutcome::NoCredentials => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Runs the check-in for every account, then sends one summary notification
pub struct CheckInRunner {
    gateway: Arc<dyn CheckInGateway>,
    notifier: NotificationService,
}

impl CheckInRunner {
    pub fn new(gateway: Arc<dyn CheckInGateway>, notifier: NotificationService) -> Self {
        Self { gateway, notifier }
    }

    /// `cookies` is the raw `&`-joined list; `None` means it was not provided.
    #[instrument(skip_all)]
    pub async fn run(&self, cookies: Option<&str>) -> RunOutcome {
        let entries = cookies.map(split_credentials).unwrap_or_default();

        if entries.iter().all(|entry| entry.trim().is_empty()) {
            error!("未获取到COOKIES变量");
            self.notifier
                .notify(NO_COOKIES_TITLE, NO_COOKIES_CONTENT)
                .await;
            return RunOutcome::NoCredentials;
        }

        info!(accounts = entries.len(), "Starting check-in run");

        let mut summary = RunSummary::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let credential = match Credential::parse(entry) {
                Ok(credential) => credential,
                Err(_) => {
                    info!(index, "跳过空cookie");
                    continue;
                }
            };

            let result = self.gateway.check_in(&credential).await;
            let line = summary.record(&result);
            info!(index, outcome = %result.outcome(), "{}", line);
        }

        let title = summary.title();
        info!("推送内容:\n{}", summary.body());
        self.notifier.notify(&title, summary.body()).await;

        RunOutcome::Completed(summary)
    }
}
