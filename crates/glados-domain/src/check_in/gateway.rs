use async_trait::async_trait;

use super::{CheckInResult, Credential};

/// Performs the check-in and status round trip for one account.
///
/// Implementations never fail: transport and parse problems are folded into
/// an error [`CheckInResult`] so one bad account cannot stop a run.
#[async_trait]
pub trait CheckInGateway: Send + Sync {
    async fn check_in(&self, credential: &Credential) -> CheckInResult;
}
