//! Error types for the field provider registry

use formmodeler_config::ConfigError;
use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in field registry operations.
///
/// Lookups that simply find nothing are not errors; they return `None`.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// A required argument was not supplied
    #[error("invalid argument: {argument} must be provided")]
    InvalidArgument { argument: &'static str },

    /// A basic provider was registered with a priority that is already taken
    #[error(
        "basic provider '{rejected}' rejected: priority {priority} is already held by '{existing}'"
    )]
    DuplicatePriority {
        priority: i32,
        existing: String,
        rejected: String,
    },

    /// A bound field names a code with no basic provider behind it
    #[error("no basic field provider registered for code: {code}")]
    BasicProviderNotFound { code: String },

    /// Registry configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}
