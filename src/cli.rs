use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal signup form with submit-time validation.
#[derive(Debug, Default, Parser)]
#[command(name = "signup-form", version)]
pub struct Cli {
    /// Config file (default: <config dir>/signup-form/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the maximum accepted age
    #[arg(long, value_name = "YEARS")]
    pub max_age: Option<u32>,

    /// Override the minimum password length
    #[arg(long, value_name = "CHARS")]
    pub min_password_length: Option<usize>,

    /// Override the delay before the confirmation view, in milliseconds
    #[arg(long, value_name = "MS")]
    pub confirm_delay_ms: Option<u64>,

    /// Write logs to this file (takes precedence over SIGNUP_FORM_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file, apply command-line overrides and validate.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(max_age) = self.max_age {
            config.policy.max_age = max_age;
        }
        if let Some(min) = self.min_password_length {
            config.policy.min_password_length = min;
        }
        if let Some(delay) = self.confirm_delay_ms {
            config.ui.confirm_delay_ms = delay;
        }
    }
}
