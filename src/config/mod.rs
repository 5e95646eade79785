//! Configuration management
//!
//! Configuration lives in a TOML file (`portico.toml` by default) with
//! `${VAR}` environment substitution and `PORTICO_*` overrides. Secrets are
//! wrapped in [`SecretString`] so they never appear in Debug output.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DrupalConfig, ExportConfig, LoggingConfig, PorticoConfig, StoryblokConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
