use clap::{Parser, Subcommand};

/// bro: inspect the browser-session controller's launch and config.
#[derive(Parser, Debug)]
#[command(name = "bro", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log filter override (e.g. `bro=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine launch switches, one per line.
    Switches {
        /// Print a JSON array instead.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as JSON.
    Config {
        /// Print the config file path instead.
        #[arg(long)]
        path: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_subcommand() {
        let args = Args::try_parse_from(["bro", "switches", "--json"]).unwrap();
        assert!(matches!(args.command, Command::Switches { json: true }));
        assert!(args.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "bro",
            "config",
            "--path",
            "--config",
            "/tmp/bro.toml",
            "--log-level",
            "bro=debug",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Config { path: true }));
        assert_eq!(args.config.as_deref(), Some("/tmp/bro.toml"));
        assert_eq!(args.log_level.as_deref(), Some("bro=debug"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["bro"]).is_err());
    }
}
