//! Configuration validation.
//!
//! Each check pushes a message onto a shared list; the orchestrator folds
//! them into a single `ConfigError`.

mod helpers;


use crate::schema::BroConfig;
use bro_common::ConfigError;

use helpers::{validate_max_len, validate_non_empty, validate_url};

/// Longest window title accepted.
pub const MAX_TITLE_LEN: usize = 256;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BroConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "window.title", &config.window.title);
    validate_max_len(&mut errors, "window.title", &config.window.title, MAX_TITLE_LEN);
    validate_url(&mut errors, "startup.home_url", &config.startup.home_url);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
