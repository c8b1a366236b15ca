//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Native window settings.
///
/// `native` selects native-window mode: the shell hosts each browser in a
/// platform window of its own, and the controller forwards title changes
/// and show-window requests to the platform hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub native: bool,
    /// Title used until the first page reports one.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            native: false,
            title: "Bro".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert!(!config.native);
        assert_eq!(config.title, "Bro");
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("native = true").unwrap();
        assert!(config.native);
        // Defaults preserved
        assert_eq!(config.title, "Bro");
    }
}
