//! Bro configuration.
//!
//! Loads a TOML config from the platform config directory. Every section
//! has defaults, so an empty or partial file is a valid config.
//!
//! The engine launch switches are deliberately not part of this crate:
//! they are fixed at build time (see `bro_core::launch`).
//!
//! ```rust,no_run
//! use bro_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BroConfig, LogLevel, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_from_path};

use bro_common::ConfigError;

/// Load config from the platform default path, creating it on first run.
pub fn load_config() -> Result<BroConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BroConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
