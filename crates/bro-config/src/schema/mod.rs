//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod startup;
mod window;

pub use logging::*;
pub use startup::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BroConfig {
    pub window: WindowConfig,
    pub startup: StartupConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: BroConfig = toml::from_str("").unwrap();
        assert!(!config.window.native);
        assert_eq!(config.window.title, "Bro");
        assert_eq!(config.startup.home_url, "about:blank");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let config: BroConfig = toml::from_str(
            r#"
[window]
native = true

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert!(config.window.native);
        assert_eq!(config.window.title, "Bro");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.startup.home_url, "about:blank");
    }
}
