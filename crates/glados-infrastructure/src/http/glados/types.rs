use serde::Serialize;
use serde_json::Value;

use glados_domain::check_in::{coerce_left_days, coerce_points, CheckInResult, UNKNOWN_EMAIL};

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/102.0.0.0 Safari/537.36";
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

pub(super) const CHECKIN_NOT_JSON: &str = "签到API返回非JSON格式";
pub(super) const STATUS_NOT_JSON: &str = "状态API返回非JSON格式";
pub(super) const UNKNOWN_CHECKIN_MESSAGE: &str = "未知签到结果";

/// Body posted to the check-in endpoint
#[derive(Debug, Serialize)]
pub(super) struct CheckInPayload {
    pub token: &'static str,
}

impl Default for CheckInPayload {
    fn default() -> Self {
        Self {
            token: "glados.one",
        }
    }
}

/// Turn the raw check-in and status bodies into a result record.
///
/// The check-in body is examined first, so when both are broken the
/// check-in error wins.
pub(super) fn interpret_responses(checkin_body: &str, status_body: &str) -> CheckInResult {
    let checkin: Value = match serde_json::from_str(checkin_body) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Check-in API returned non-JSON body: {}", e);
            return CheckInResult::error(CHECKIN_NOT_JSON);
        }
    };

    let status: Value = match serde_json::from_str(status_body) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Status API returned non-JSON body: {}", e);
            return CheckInResult::error(STATUS_NOT_JSON);
        }
    };

    let Some(data) = status.get("data").filter(|data| data.is_object()) else {
        log::warn!("Status API response has no 'data' object: {}", status);
        return CheckInResult::error(format!("状态API未返回'data'键: {}", status));
    };

    let email = data
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_EMAIL);
    let left_days = coerce_left_days(data.get("leftDays"));

    let message = match checkin.get("message") {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => UNKNOWN_CHECKIN_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    };
    let points = coerce_points(checkin.get("points"));

    CheckInResult::new(email, message, points, left_days)
}
