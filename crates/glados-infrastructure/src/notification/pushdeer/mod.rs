mod sender;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::TimeoutConfig;

/// PushDeer push-key notification sender
pub struct PushDeerSender {
    push_key: String,
    server: String,
    client: Client,
}

impl PushDeerSender {
    pub fn new(push_key: impl Into<String>, server: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(TimeoutConfig::global().notification)
            .build()
            .context("Failed to create PushDeer HTTP client")?;

        Ok(Self {
            push_key: push_key.into(),
            server: server.into(),
            client,
        })
    }

    fn build_push_url(&self) -> String {
        format!("{}/message/push", self.server.trim_end_matches('/'))
    }
}
