//! Configuration management for the skyscrapers checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Log level selection

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the checker binary
#[derive(Debug, Parser)]
#[command(name = "sky-check")]
#[command(about = "Check a finished skyscrapers board against the puzzle rules")]
#[command(version)]
pub struct Args {
    /// Path to the board file to check
    pub board: PathBuf,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Board file to validate
    pub board_path: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Config {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Config {
        Config {
            board_path: args.board,
            log_level: args.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let args = Args {
            board: PathBuf::from("check.txt"),
            log_level: "debug".to_string(),
        };
        let config = Config::from_args(args);
        assert_eq!(config.board_path, PathBuf::from("check.txt"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::parse_from(["sky-check", "board.txt"]);
        assert_eq!(args.board, PathBuf::from("board.txt"));
        assert_eq!(args.log_level, "info");
    }
}
