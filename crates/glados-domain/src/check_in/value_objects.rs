use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Email shown when the status endpoint did not identify the account
pub const UNKNOWN_EMAIL: &str = "Unknown";

/// Marker stored in `left_days` when the remaining days could not be determined
pub const LEFT_DAYS_ERROR: &str = "error";

const SUCCESS_MARKER: &str = "Checkin! Got";
const REPEAT_MARKER: &str = "Checkin Repeats!";

/// Normalized outcome of one account's check-in and status round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInResult {
    pub email: String,
    pub message: String,
    pub points: f64,
    pub left_days: String,
}

impl CheckInResult {
    pub fn new(
        email: impl Into<String>,
        message: impl Into<String>,
        points: f64,
        left_days: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
            points,
            left_days: left_days.into(),
        }
    }

    /// Placeholder record for an account whose round trip could not be completed
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(UNKNOWN_EMAIL, message, 0.0, LEFT_DAYS_ERROR)
    }

    pub fn is_error(&self) -> bool {
        self.left_days == LEFT_DAYS_ERROR
    }

    pub fn outcome(&self) -> CheckInOutcome {
        CheckInOutcome::classify(&self.message)
    }
}

/// How a check-in message counts towards the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInOutcome {
    Success,
    Repeat,
    Fail,
}

impl CheckInOutcome {
    /// Success wins over repeat when a message somehow carries both markers.
    pub fn classify(message: &str) -> Self {
        if message.contains(SUCCESS_MARKER) {
            CheckInOutcome::Success
        } else if message.contains(REPEAT_MARKER) {
            CheckInOutcome::Repeat
        } else {
            CheckInOutcome::Fail
        }
    }
}

impl fmt::Display for CheckInOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckInOutcome::Success => write!(f, "success"),
            CheckInOutcome::Repeat => write!(f, "repeat"),
            CheckInOutcome::Fail => write!(f, "fail"),
        }
    }
}

/// Coerce the status endpoint's `leftDays` value into the displayed day count.
///
/// A missing value counts as zero. Falsy JSON values (`null`, `false`, `0`,
/// `""`, `[]`, `{}`) map to `"0"`; anything else must be numeric after
/// truncation toward zero, otherwise the result is `"error"`.
pub fn coerce_left_days(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "0".to_string();
    };

    match value {
        Value::Null => "0".to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Number(number) => number
            .as_f64()
            .map(format_truncated)
            .unwrap_or_else(|| LEFT_DAYS_ERROR.to_string()),
        Value::String(text) if text.is_empty() => "0".to_string(),
        Value::String(text) => match text.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => format_truncated(parsed),
            _ => LEFT_DAYS_ERROR.to_string(),
        },
        Value::Array(items) if items.is_empty() => "0".to_string(),
        Value::Object(fields) if fields.is_empty() => "0".to_string(),
        Value::Array(_) | Value::Object(_) => LEFT_DAYS_ERROR.to_string(),
    }
}

/// Read a points value that may arrive as a number or a numeric string.
pub fn coerce_points(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|points| points.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn format_truncated(value: f64) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        // avoid "-0" for values in (-1, 0)
        return "0".to_string();
    }
    format!("{:.0}", truncated)
}
