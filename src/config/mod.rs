//! Configuration file handling.
//!
//! ```toml
//! [policy]
//! max_age = 40
//! min_password_length = 6
//!
//! [ui]
//! confirm_delay_ms = 2000
//! tick_rate_ms = 250
//! ```

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, UiConfig};
