use std::time::Duration;

/// Configuration for the timeout durations used by outbound requests
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Per-request timeout for the check-in and status endpoints
    pub http_request: Duration,

    /// Per-request timeout for push notification delivery
    pub notification: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

/// Global timeout configuration instance
static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    http_request: Duration::from_secs(10),
    notification: Duration::from_secs(10),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_global() {
        let config = TimeoutConfig::new();
        assert_eq!(config.http_request, Duration::from_secs(10));
        assert_eq!(config.http_request, TimeoutConfig::global().http_request);
        assert_eq!(config.notification, TimeoutConfig::global().notification);
    }
}
