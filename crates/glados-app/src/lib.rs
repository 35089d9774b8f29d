pub mod application;
pub mod bootstrap;

pub use application::config::AppConfig;
pub use application::services::{CheckInRunner, NotificationService, RunOutcome};
