use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Notification message to be sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message content/body
    pub content: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Notification sender trait (Strategy pattern)
/// Each push provider implements this trait
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a notification message
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new_accepts_str_and_string() {
        let message = NotificationMessage::new("Glados 签到失败", String::from("未找到 COOKIES!"));
        assert_eq!(message.title, "Glados 签到失败");
        assert_eq!(message.content, "未找到 COOKIES!");
    }
}
