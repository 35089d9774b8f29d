use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};

use glados_domain::check_in::{CheckInGateway, CheckInResult, Credential};

use super::types::{interpret_responses, CheckInPayload};

impl super::GladosClient {
    /// Issue the check-in POST and the status GET, returning both raw bodies.
    ///
    /// HTTP status codes are logged but never treated as failures; only
    /// transport problems produce an error.
    async fn fetch_bodies(&self, credential: &Credential) -> Result<(String, String)> {
        let headers = self.build_headers(credential)?;
        let payload = serde_json::to_string(&CheckInPayload::default())
            .context("Failed to encode check-in payload")?;

        let checkin = self
            .client
            .post(self.endpoints.check_in_url())
            .headers(headers.clone())
            .body(payload)
            .send()
            .await
            .context("Failed to send check-in request")?;
        let checkin_status = checkin.status();
        let checkin_body = checkin
            .text()
            .await
            .context("Failed to read check-in response")?;
        info!("Check-in response status: {}", checkin_status);
        info!("Check-in response body: {}", checkin_body);

        let status = self
            .client
            .get(self.endpoints.status_url())
            .headers(headers)
            .send()
            .await
            .context("Failed to send status request")?;
        let status_code = status.status();
        let status_body = status
            .text()
            .await
            .context("Failed to read status response")?;
        info!("Status response status: {}", status_code);
        info!("Status response body: {}", status_body);

        Ok((checkin_body, status_body))
    }
}

#[async_trait]
impl CheckInGateway for super::GladosClient {
    async fn check_in(&self, credential: &Credential) -> CheckInResult {
        match self.fetch_bodies(credential).await {
            Ok((checkin_body, status_body)) => interpret_responses(&checkin_body, &status_body),
            Err(e) => {
                warn!("Check-in round trip failed: {:#}", e);
                CheckInResult::error(format!("请求失败: {:#}", e))
            }
        }
    }
}
