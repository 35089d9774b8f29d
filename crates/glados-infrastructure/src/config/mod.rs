mod endpoints;
mod timeouts;

pub use endpoints::{GladosEndpoints, DEFAULT_GLADOS_BASE_URL, DEFAULT_PUSHDEER_SERVER};
pub use timeouts::TimeoutConfig;
