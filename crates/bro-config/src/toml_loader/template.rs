//! Default TOML config template with inline documentation comments.

use super::paths::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

const BODY: &str = r##"# Only override what you want to change -- missing fields use defaults.

[window]
# native = false         # host each tab in its own platform window
# title = "Bro"          # shown until the page reports a title

[startup]
# home_url = "about:blank"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##;

pub(crate) fn default_config_toml() -> String {
    format!("# Bro configuration ({CONFIG_DIR_NAME}/{CONFIG_FILE_NAME})\n# Schema version 1\n{BODY}")
}
