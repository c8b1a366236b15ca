mod cli;

use std::path::{Path, PathBuf};

use bro_common::Result;
use bro_config::BroConfig;
use bro_core::launch::launch_switches;
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_DIRECTIVE: &str = "bro=info";

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<BroConfig> {
    let config = match path {
        Some(path) => bro_config::load_from_path(Path::new(path))?,
        None => bro_config::load_config()?,
    };
    Ok(config)
}

fn config_path(path: Option<&str>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(bro_config::default_config_path()?),
    }
}

fn print_switches(json: bool) -> Result<()> {
    let args: Vec<String> = launch_switches().iter().map(|s| s.to_arg()).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&args)?);
    } else {
        for arg in args {
            println!("{arg}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::parse();

    // Config is read before logging starts so its level can seed the filter.
    let loaded = load_config(args.config.as_deref());
    let config_directive = loaded.as_ref().ok().map(|c| c.logging.level.directive());
    let directive = args
        .log_level
        .as_deref()
        .or(config_directive)
        .unwrap_or(DEFAULT_DIRECTIVE);
    init_logging(directive);

    tracing::debug!("bro v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        // An explicit path that cannot be read is an error; the default
        // location falls back to built-in defaults.
        Err(e) if args.config.is_some() => return Err(e),
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            BroConfig::default()
        }
    };

    match args.command {
        Command::Switches { json } => print_switches(json)?,
        Command::Config { path: true } => {
            println!("{}", config_path(args.config.as_deref())?.display());
        }
        Command::Config { path: false } => {
            println!("{}", bro_config::config_to_json(&config));
        }
    }

    Ok(())
}
