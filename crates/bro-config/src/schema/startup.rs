use serde::{Deserialize, Serialize};

/// What the shell opens when it creates a tab without a target URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    pub home_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            home_url: "about:blank".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_config_defaults() {
        assert_eq!(StartupConfig::default().home_url, "about:blank");
    }

    #[test]
    fn startup_config_from_toml() {
        let config: StartupConfig = toml::from_str(r#"home_url = "https://example.com""#).unwrap();
        assert_eq!(config.home_url, "https://example.com");
    }
}
