use async_trait::async_trait;
use serde_json::Value;

use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_domain::shared::DomainError;

#[async_trait]
impl NotificationSender for super::PushDeerSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = self.build_push_url();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("pushkey", self.push_key.as_str()),
                ("text", message.title.as_str()),
                ("desp", message.content.as_str()),
                ("type", "text"),
            ])
            .send()
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to send PushDeer notification: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Infrastructure(format!(
                "PushDeer push failed with status {}: {}",
                status, body
            )));
        }

        let resp_body: Value = response.json().await.map_err(|e| {
            DomainError::Infrastructure(format!("Failed to parse PushDeer response: {}", e))
        })?;

        check_push_reply(&resp_body)
    }
}

/// PushDeer answers `{"code":0,"content":{"result":["<json>"]}}`, where each
/// result entry is itself a JSON document carrying `"success":"ok"`.
fn check_push_reply(reply: &Value) -> Result<(), DomainError> {
    match reply.get("code").and_then(Value::as_i64) {
        Some(0) => {}
        Some(code) => {
            let msg = reply
                .get("error")
                .or_else(|| reply.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(DomainError::Infrastructure(format!(
                "PushDeer error code {}: {}",
                code, msg
            )));
        }
        None => {
            return Err(DomainError::Infrastructure(format!(
                "Unexpected PushDeer response: {}",
                reply
            )));
        }
    }

    let first_result = match reply.pointer("/content/result/0") {
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).unwrap_or(Value::Null),
        Some(other) => other.clone(),
        None => {
            return Err(DomainError::Infrastructure(
                "PushDeer reported no delivery result".to_string(),
            ))
        }
    };

    match first_result.get("success").and_then(Value::as_str) {
        Some("ok") => Ok(()),
        _ => Err(DomainError::Infrastructure(format!(
            "PushDeer delivery not confirmed: {}",
            first_result
        ))),
    }
}
