use serde::{Deserialize, Serialize};

use super::{CheckInOutcome, CheckInResult};

/// Tally of one run, plus the text that ends up in the notification body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub success: usize,
    pub fail: usize,
    pub repeat: usize,
    log: String,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a result and append its log line; returns the line without the newline.
    pub fn record(&mut self, result: &CheckInResult) -> String {
        let status = match result.outcome() {
            CheckInOutcome::Success => {
                self.success += 1;
                format!("签到成功，会员点数 + {}", result.points)
            }
            CheckInOutcome::Repeat => {
                self.repeat += 1;
                "重复签到，明天再来".to_string()
            }
            CheckInOutcome::Fail => {
                self.fail += 1;
                format!("签到失败: {}", result.message)
            }
        };

        let line = format!(
            "账号: {}, P: {}, 剩余: {} 天 | {}",
            result.email, result.points, result.left_days, status
        );
        self.log.push_str(&line);
        self.log.push('\n');
        line
    }

    pub fn total(&self) -> usize {
        self.success + self.fail + self.repeat
    }

    pub fn title(&self) -> String {
        format!(
            "Glados, 成功{}, 失败{}, 重复{}",
            self.success, self.fail, self.repeat
        )
    }

    pub fn body(&self) -> &str {
        &self.log
    }
}
