use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::form::{Policy, CONFIRM_DELAY};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation thresholds.
    pub policy: Policy,
    pub ui: UiConfig,
}

/// Terminal front-end timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay between a successful submit and the confirmation view (default: 2000).
    pub confirm_delay_ms: u64,
    /// Redraw tick in milliseconds (default: 250).
    pub tick_rate_ms: u64,
}

impl UiConfig {
    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_confirm_delay_ms() -> u64 {
    CONFIRM_DELAY.as_millis() as u64
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
