//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PorticoConfig;
use super::secret::{secret_string, secret_string_opt};
use crate::domain::errors::PorticoError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PorticoConfig
/// 4. Applies environment variable overrides (PORTICO_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is missing, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<PorticoConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PorticoError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PorticoError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PorticoConfig = toml::from_str(&contents)
        .map_err(|e| PorticoError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PorticoError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Returns an error naming every
/// referenced variable that is not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PorticoError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PORTICO_* prefix
///
/// Environment variables follow the pattern: PORTICO_<SECTION>_<KEY>
/// For example: PORTICO_DRUPAL_BASE_URL, PORTICO_STORYBLOK_SPACE_ID
fn apply_env_overrides(config: &mut PorticoConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PORTICO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Drupal overrides
    if let Ok(val) = std::env::var("PORTICO_DRUPAL_BASE_URL") {
        config.drupal.base_url = val;
    }
    if let Ok(val) = std::env::var("PORTICO_DRUPAL_USERNAME") {
        config.drupal.username = Some(val);
    }
    if let Ok(val) = std::env::var("PORTICO_DRUPAL_PASSWORD") {
        config.drupal.password = secret_string_opt(Some(val));
    }
    if let Ok(val) = std::env::var("PORTICO_DRUPAL_FILES_DIR") {
        config.drupal.files_dir = val;
    }

    // Storyblok overrides
    if let Ok(val) = std::env::var("PORTICO_STORYBLOK_BASE_URL") {
        config.storyblok.base_url = val;
    }
    if let Ok(val) = std::env::var("PORTICO_STORYBLOK_OAUTH_TOKEN") {
        config.storyblok.oauth_token = secret_string(val);
    }
    if let Ok(val) = std::env::var("PORTICO_STORYBLOK_SPACE_ID") {
        config.storyblok.space_id = val;
    }
    if let Ok(val) = std::env::var("PORTICO_STORYBLOK_DATASOURCE_ID") {
        if let Ok(id) = val.parse() {
            config.storyblok.datasource_id = id;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("PORTICO_EXPORT_CONTENT_TYPE") {
        config.export.content_type = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PORTICO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PORTICO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PORTICO_TEST_VAR", "test_value");
        let input = "oauth_token = \"${PORTICO_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "oauth_token = \"test_value\"\n");
        std::env::remove_var("PORTICO_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("PORTICO_MISSING_VAR");
        let input = "oauth_token = \"${PORTICO_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("PORTICO_COMMENTED_VAR");
        let input = "# oauth_token = \"${PORTICO_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${PORTICO_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[drupal]
base_url = "https://drupal.example.com"
files_dir = "/var/www/html/sites/default/files"

[storyblok]
oauth_token = "test-token"
space_id = "12345"
datasource_id = 99
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).expect("Failed to load config");
        assert_eq!(config.drupal.base_url, "https://drupal.example.com");
        assert_eq!(config.storyblok.space_id, "12345");
        assert_eq!(config.export.content_type, "article");
        assert_eq!(config.storyblok.base_url, "https://mapi.storyblok.com/v1");
    }
}
