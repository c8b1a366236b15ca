//! Where the config file lives, and first-run creation of it.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use bro_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// Directory under the platform config root that holds the file.
pub(crate) const CONFIG_DIR_NAME: &str = "bro";

pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

/// `<base>/bro/config.toml`.
pub(crate) fn config_path_under(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// The config file inside [`dirs::config_dir`].
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))?;
    Ok(config_path_under(&base))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched, so a user's edits survive a race
/// with another process doing first-run setup.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", at.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_err("failed to create config directory", parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}, not overwriting", path.display());
            return Ok(());
        }
        Err(e) => return Err(io_err("failed to create", path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("failed to write default config to", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
