use std::fmt;

use crate::shared::DomainError;

/// Separator between account cookies in the `COOKIES` variable
pub const CREDENTIAL_SEPARATOR: char = '&';

/// Session cookie authenticating a single account
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Build a credential from one raw entry, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput(
                "Credential is blank".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Cookies are secrets; keep them out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} bytes>)", self.0.len())
    }
}

/// Split the raw credential list, keeping blank entries so callers can report them.
pub fn split_credentials(raw: &str) -> Vec<&str> {
    raw.split(CREDENTIAL_SEPARATOR).collect()
}
