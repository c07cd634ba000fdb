//! Conversion error types.

use thiserror::Error;

/// Top-level conversion error type.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The source event does not satisfy the typed input contract.
    #[error("invalid input contract on `{field}`: {reason}")]
    InvalidInput {
        /// The offending field, or `payload` when the whole event failed typing.
        field: String,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The statement identifier could not be derived.
    #[error("identity generation error: {0}")]
    IdentityGeneration(String),

    /// The configured platform URL is not an absolute URL.
    #[error("invalid platform url `{url}`: {reason}")]
    InvalidPlatformUrl {
        /// The rejected URL text.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The canonical event string is not JSON.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// No converter is registered for the event's tag.
    #[error("unsupported event type: {event_type}")]
    UnsupportedEvent {
        /// The `event_type` (or `event_source`) that did not match.
        event_type: String,
    },
}

impl ConversionError {
    /// Shorthand for an [`ConversionError::InvalidInput`] on a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
