use std::path::PathBuf;
use tracing::warn;

use glados_infrastructure::config::{
    GladosEndpoints, DEFAULT_GLADOS_BASE_URL, DEFAULT_PUSHDEER_SERVER,
};

pub const SENDKEY_VAR: &str = "SENDKEY";
pub const COOKIES_VAR: &str = "COOKIES";
pub const GLADOS_BASE_URL_VAR: &str = "GLADOS_BASE_URL";
pub const PUSHDEER_SERVER_VAR: &str = "PUSHDEER_SERVER";
pub const LOG_DIR_VAR: &str = "CHECKIN_LOG_DIR";

/// Settings for one run, read from the process environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PushDeer key; empty disables notifications
    pub send_key: String,
    /// Raw `&`-joined cookie list, `None` when unset
    pub cookies: Option<String>,
    pub endpoints: GladosEndpoints,
    pub pushdeer_server: String,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// Overrides never fail the run: blank values use the defaults and an
    /// unusable GLaDOS base URL is reported and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoints = match non_blank(&lookup, GLADOS_BASE_URL_VAR) {
            Some(base_url) => GladosEndpoints::parse(&base_url).unwrap_or_else(|e| {
                warn!(
                    "{}, using {}",
                    e.format_with_code(),
                    DEFAULT_GLADOS_BASE_URL
                );
                GladosEndpoints::default()
            }),
            None => GladosEndpoints::default(),
        };

        Self {
            send_key: lookup(SENDKEY_VAR).unwrap_or_default().trim().to_string(),
            cookies: lookup(COOKIES_VAR),
            endpoints,
            pushdeer_server: non_blank(&lookup, PUSHDEER_SERVER_VAR)
                .unwrap_or_else(|| DEFAULT_PUSHDEER_SERVER.to_string()),
            log_dir: log_dir_from_lookup(&lookup),
        }
    }
}

/// Log directory alone, so logging can be set up before the rest is read
pub fn log_dir_from_env() -> Option<PathBuf> {
    log_dir_from_lookup(&|key: &str| std::env::var(key).ok())
}

fn log_dir_from_lookup<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup, LOG_DIR_VAR).map(PathBuf::from)
}

fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
