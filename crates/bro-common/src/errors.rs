use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BroError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("logging.level = loud".into());
        assert_eq!(
            err.to_string(),
            "config validation error: logging.level = loud"
        );
    }

    #[test]
    fn bro_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: BroError = config_err.into();
        assert!(matches!(err, BroError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn bro_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BroError = io_err.into();
        assert!(matches!(err, BroError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn bro_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BroError = json_err.into();
        assert!(matches!(err, BroError::Json(_)));
    }
}
