mod credential;
mod gateway;
mod summary;
mod value_objects;


pub use credential::{split_credentials, Credential};
pub use gateway::CheckInGateway;
pub use summary::RunSummary;
pub use value_objects::{
    coerce_left_days, coerce_points, CheckInOutcome, CheckInResult, LEFT_DAYS_ERROR, UNKNOWN_EMAIL,
};
