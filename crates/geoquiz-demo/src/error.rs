//! GeoQuiz demo: error types.

use geoquiz_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the demo runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The reveal engine rejected an action.
    #[error("reveal error: {0}")]
    Domain(#[from] DomainError),

    /// Reading the scenario file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario file is not a valid game snapshot.
    #[error("invalid scenario: {0}")]
    Scenario(#[from] serde_json::Error),
}
