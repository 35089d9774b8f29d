mod check_in_runner;
mod notification_service;

pub use check_in_runner::{CheckInRunner, RunOutcome};
pub use notification_service::{DeliveryStatus, NotificationService};
