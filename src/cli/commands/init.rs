//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "portico.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Portico configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set PORTICO_STORYBLOK_OAUTH_TOKEN");
                println!("     - Set PORTICO_DRUPAL_PASSWORD (if the site requires auth)");
                println!("  3. Validate configuration: portico validate-config");
                println!("  4. Run export: portico export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate starter configuration
    fn generate_config() -> String {
        r#"# Portico Configuration File
# Drupal to Storyblok ETL Tool

[application]
log_level = "info"

[drupal]
base_url = "https://drupal.example.com"

# HTTP Basic authentication (optional; omit for anonymous access)
# username = "${PORTICO_DRUPAL_USERNAME}"
# password = "${PORTICO_DRUPAL_PASSWORD}"

# Local directory public:// files resolve into
files_dir = "/var/www/html/sites/default/files"

timeout_seconds = 30

[storyblok]
base_url = "https://mapi.storyblok.com/v1"
oauth_token = "${PORTICO_STORYBLOK_OAUTH_TOKEN}"
space_id = "12345"
datasource_id = 99
timeout_seconds = 30

[export]
content_type = "article"

[logging]
local_enabled = false
local_path = "/var/log/portico"
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "portico.toml".to_string(),
            force: false,
        };

        assert_eq!(args.output, "portico.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generate_config_sections() {
        let config = InitArgs::generate_config();
        assert!(config.contains("[drupal]"));
        assert!(config.contains("[storyblok]"));
        assert!(config.contains("${PORTICO_STORYBLOK_OAUTH_TOKEN}"));
    }
}
