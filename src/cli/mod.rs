//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Portico using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Portico - Drupal to Storyblok ETL Tool
#[derive(Parser, Debug)]
#[command(name = "portico")]
#[command(version, about, long_about = None)]
#[command(author = "Portico Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "portico.toml", env = "PORTICO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PORTICO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export published articles from Drupal to Storyblok
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["portico", "export"]);
        assert_eq!(cli.config, "portico.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["portico", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["portico", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_with_limit() {
        let cli = Cli::parse_from(["portico", "export", "--limit", "10"]);
        match cli.command {
            Commands::Export(args) => assert_eq!(args.limit, Some(10)),
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["portico", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["portico", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
