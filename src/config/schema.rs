//! Configuration schema types
//!
//! This module defines the configuration structure for Portico. Everything
//! the destination client needs (token, space id, datasource id) is carried
//! here explicitly and validated at startup; nothing is looked up from
//! process-wide state mid-call.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Portico configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PorticoConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source Drupal site configuration
    pub drupal: DrupalConfig,

    /// Destination Storyblok space configuration
    pub storyblok: StoryblokConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PorticoConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.drupal.validate()?;
        self.storyblok.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Source Drupal site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrupalConfig {
    /// Base URL of the Drupal site (JSON:API is expected under /jsonapi)
    pub base_url: String,

    /// Username for HTTP Basic authentication (optional; published content
    /// is usually readable anonymously)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for HTTP Basic authentication (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Local directory the `public://` file scheme maps onto, used to read
    /// asset bytes for upload
    #[serde(default = "default_files_dir")]
    pub files_dir: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl DrupalConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("drupal.base_url cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("drupal.base_url is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("drupal.base_url must start with http:// or https://".to_string());
        }

        if self.username.is_some()
            && self
                .password
                .as_ref()
                .map(|s| s.expose_secret().is_empty())
                .unwrap_or(true)
        {
            return Err("drupal.password cannot be empty when drupal.username is set".to_string());
        }

        if self.files_dir.is_empty() {
            return Err("drupal.files_dir cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Destination Storyblok space configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryblokConfig {
    /// Base URL of the Management API
    #[serde(default = "default_storyblok_base_url")]
    pub base_url: String,

    /// Management API OAuth token
    /// Stored securely in memory and automatically zeroized on drop
    pub oauth_token: SecretString,

    /// Space identifier stories and assets are created in
    pub space_id: String,

    /// Datasource identifier tag entries are registered under
    pub datasource_id: i64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl StoryblokConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("storyblok.base_url is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("storyblok.base_url must start with http:// or https://".to_string());
        }

        if self.oauth_token.expose_secret().is_empty() {
            return Err("storyblok.oauth_token cannot be empty".to_string());
        }

        if self.space_id.is_empty() {
            return Err("storyblok.space_id cannot be empty".to_string());
        }

        if self.datasource_id <= 0 {
            return Err(format!(
                "storyblok.datasource_id must be positive, got {}",
                self.datasource_id
            ));
        }

        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Source content type to export
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.content_type.is_empty() {
            return Err("export.content_type cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            content_type: default_content_type(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_files_dir() -> String {
    "sites/default/files".to_string()
}

fn default_storyblok_base_url() -> String {
    "https://mapi.storyblok.com/v1".to_string()
}

fn default_content_type() -> String {
    "article".to_string()
}

fn default_local_path() -> String {
    "/var/log/portico".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
