use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Oldest accepted age, inclusive.
pub const MAX_AGE: u32 = 40;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Delay between a successful submit and the confirmation view.
pub const CONFIRM_DELAY: Duration = Duration::from_secs(2);

/// Thresholds applied at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub max_age: u32,
    pub min_password_length: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_age: MAX_AGE,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}
