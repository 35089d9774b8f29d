use url::Url;

use glados_domain::shared::DomainError;

pub const DEFAULT_GLADOS_BASE_URL: &str = "https://glados.space";
pub const DEFAULT_PUSHDEER_SERVER: &str = "https://api2.pushdeer.com";

/// URLs of the GLaDOS console derived from a single base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GladosEndpoints {
    base: String,
    origin: String,
}

impl GladosEndpoints {
    pub fn parse(base_url: &str) -> Result<Self, DomainError> {
        let base = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(base).map_err(|e| {
            DomainError::Configuration(format!("Invalid GLaDOS base URL '{}': {}", base, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Configuration(format!(
                "Unsupported scheme '{}' in GLaDOS base URL",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base: base.to_string(),
            origin: parsed.origin().ascii_serialization(),
        })
    }

    pub fn check_in_url(&self) -> String {
        format!("{}/api/user/checkin", self.base)
    }

    pub fn status_url(&self) -> String {
        format!("{}/api/user/status", self.base)
    }

    pub fn referer(&self) -> String {
        format!("{}/console/checkin", self.base)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl Default for GladosEndpoints {
    fn default() -> Self {
        Self {
            base: DEFAULT_GLADOS_BASE_URL.to_string(),
            origin: DEFAULT_GLADOS_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = GladosEndpoints::default();
        assert_eq!(
            endpoints.check_in_url(),
            "https://glados.space/api/user/checkin"
        );
        assert_eq!(
            endpoints.status_url(),
            "https://glados.space/api/user/status"
        );
        assert_eq!(
            endpoints.referer(),
            "https://glados.space/console/checkin"
        );
        assert_eq!(endpoints.origin(), "https://glados.space");
    }

    #[test]
    fn test_parse_matches_default() {
        let parsed = GladosEndpoints::parse("https://glados.space/").unwrap();
        assert_eq!(parsed, GladosEndpoints::default());
    }

    #[test]
    fn test_parse_keeps_port_in_origin() {
        let endpoints = GladosEndpoints::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(endpoints.origin(), "http://127.0.0.1:8080");
        assert_eq!(
            endpoints.status_url(),
            "http://127.0.0.1:8080/api/user/status"
        );
    }

    #[test]
    fn test_parse_rejects_invalid_urls() {
        assert!(matches!(
            GladosEndpoints::parse("not a url"),
            Err(DomainError::Configuration(_))
        ));
        assert!(GladosEndpoints::parse("ftp://glados.space").is_err());
    }
}
