use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use property_map_core::DATA_FILE;

use crate::cli::CliArgs;

/// Environment variable naming the data file when `--data` is not given.
pub const DATA_ENV: &str = "PROPERTY_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Flags win over the environment, the environment over defaults.
    pub fn from_args(args: &CliArgs) -> Self {
        dotenv().ok();
        Self::resolve(args, env::var(DATA_ENV).ok(), env::var("DEBUG").is_ok())
    }

    fn resolve(args: &CliArgs, env_data: Option<String>, env_debug: bool) -> Self {
        let data_path = args
            .data
            .clone()
            .or_else(|| env_data.filter(|path| !path.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE));

        Self {
            data_path,
            debug: args.debug || env_debug,
        }
    }

    pub const fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("property-map").chain(argv.iter().copied()))
    }

    #[test]
    fn test_flag_beats_environment() {
        let config = AppConfig::resolve(
            &args(&["--data", "from-flag.json"]),
            Some("from-env.json".to_string()),
            false,
        );
        assert_eq!(config.data_path, PathBuf::from("from-flag.json"));
    }

    #[test]
    fn test_environment_beats_default() {
        let config = AppConfig::resolve(&args(&[]), Some("from-env.json".to_string()), false);
        assert_eq!(config.data_path, PathBuf::from("from-env.json"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(&args(&[]), Some("  ".to_string()), false);
        assert_eq!(config.data_path, PathBuf::from(DATA_FILE));
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_debug_from_flag_or_environment() {
        assert!(AppConfig::resolve(&args(&["--debug"]), None, false).debug);
        assert_eq!(AppConfig::resolve(&args(&[]), None, true).log_filter(), "debug");
    }
}
