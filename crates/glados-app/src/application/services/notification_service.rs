use std::sync::Arc;
use tracing::{error, info};

use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_infrastructure::notification::PushDeerSender;

/// What happened to a notification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Skipped,
    Sent,
    Failed,
}

/// Notification application service
/// Delivers the run summary and never lets a delivery problem escape
pub struct NotificationService {
    sender: Option<Arc<dyn NotificationSender>>,
}

impl NotificationService {
    /// PushDeer-backed service; an empty key disables delivery.
    ///
    /// A sender that cannot be built is logged and treated like a missing key.
    pub fn pushdeer(send_key: &str, server: &str) -> Self {
        if send_key.is_empty() {
            return Self::disabled();
        }
        match PushDeerSender::new(send_key, server) {
            Ok(sender) => Self::with_sender(Arc::new(sender)),
            Err(e) => {
                error!("PushDeer 通知初始化失败: {:#}", e);
                Self::disabled()
            }
        }
    }

    pub fn with_sender(sender: Arc<dyn NotificationSender>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub async fn notify(&self, title: &str, content: &str) -> DeliveryStatus {
        let Some(sender) = &self.sender else {
            info!("未提供 PushDeer SENDKEY，跳过通知");
            return DeliveryStatus::Skipped;
        };

        let message = NotificationMessage::new(title, content);
        match sender.send(&message).await {
            Ok(()) => {
                info!("PushDeer 通知发送成功");
                DeliveryStatus::Sent
            }
            Err(e) => {
                error!(code = e.code().code(), "PushDeer 通知发送失败: {}", e);
                DeliveryStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use glados_domain::shared::DomainError;
    use mockall::mock;

    mock! {
        pub Sender {}

        #[async_trait]
        impl NotificationSender for Sender {
            async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
        }
    }

    #[tokio::test]
    async fn test_empty_key_skips_delivery() {
        let service = NotificationService::pushdeer("", "https://api2.pushdeer.com");
        assert_eq!(service.notify("title", "body").await, DeliveryStatus::Skipped);
    }

    #[tokio::test]
    async fn test_successful_delivery() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|message| message.title == "Glados, 成功1, 失败0, 重复0" && message.content == "line\n")
            .times(1)
            .returning(|_| Ok(()));

        let service = NotificationService::with_sender(Arc::new(sender));

        assert_eq!(
            service.notify("Glados, 成功1, 失败0, 重复0", "line\n").await,
            DeliveryStatus::Sent
        );
    }

    #[tokio::test]
    async fn test_delivery_error_is_swallowed() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(DomainError::Infrastructure("offline".to_string())));

        let service = NotificationService::with_sender(Arc::new(sender));

        assert_eq!(service.notify("t", "b").await, DeliveryStatus::Failed);
    }
}
