//! Error type for CLI commands

use formmodeler_config::ConfigError;
use formmodeler_fields::FieldsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fields(#[from] FieldsError),

    #[error("failed to write output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
