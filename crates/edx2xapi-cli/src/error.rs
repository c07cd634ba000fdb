//! edx2xapi CLI error types.

use edx2xapi_core::batch::BatchError;
use edx2xapi_core::error::ConversionError;
use thiserror::Error;

/// Startup and runtime errors for the converter binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The converter settings were rejected.
    #[error("converter configuration error: {0}")]
    Converter(#[from] ConversionError),

    /// An event could not be converted.
    #[error("conversion error: {0}")]
    Conversion(#[from] BatchError),

    /// A statement could not be written as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading events or writing statements failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
