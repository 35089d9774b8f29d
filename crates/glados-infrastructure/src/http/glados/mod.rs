mod check_in;
mod types;

pub use types::USER_AGENT;

use anyhow::{Context, Result};
use reqwest::{header, Client};

use glados_domain::check_in::Credential;

use crate::config::{GladosEndpoints, TimeoutConfig};
use types::JSON_CONTENT_TYPE;

/// Client for the GLaDOS check-in and status endpoints
pub struct GladosClient {
    pub(super) client: Client,
    pub(super) endpoints: GladosEndpoints,
}

impl GladosClient {
    pub fn new(endpoints: GladosEndpoints) -> Result<Self> {
        Self::with_timeout_config(endpoints, TimeoutConfig::global())
    }

    pub fn with_timeout_config(
        endpoints: GladosEndpoints,
        timeout_config: &TimeoutConfig,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout_config.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoints })
    }

    /// Headers shared by the check-in and status requests
    pub(super) fn build_headers(&self, credential: &Credential) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::COOKIE,
            header::HeaderValue::from_str(credential.as_str())
                .context("Cookie contains characters not allowed in a header")?,
        );
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_str(&self.endpoints.referer())?,
        );
        headers.insert(
            header::ORIGIN,
            header::HeaderValue::from_str(self.endpoints.origin())?,
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        Ok(headers)
    }
}
