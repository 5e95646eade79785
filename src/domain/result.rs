//! Result type alias for Portico operations

use crate::domain::errors::PorticoError;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, PorticoError>;
