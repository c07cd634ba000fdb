//! Field extraction helpers shared by the converters.
//!
//! Each helper reads one typed field off a source event and produces the
//! value an xAPI extension or object id carries. None of them sanitize:
//! identifiers flow into IRIs verbatim.

use serde_json::{Number, Value};
use uuid::Uuid;

use crate::error::ConversionError;
use crate::source::BaseEdxEvent;

/// Returns the event's session key as a lowercase hyphenated UUID.
///
/// # Errors
///
/// Returns `ConversionError::InvalidInput` if the session is missing or is
/// not a UUID.
pub fn session_id(event: &BaseEdxEvent) -> Result<String, ConversionError> {
    let session = event
        .session
        .as_deref()
        .ok_or_else(|| ConversionError::invalid_input("session", "missing session"))?;
    let parsed = Uuid::parse_str(session).map_err(|e| {
        ConversionError::invalid_input("session", format!("`{session}` is not a uuid: {e}"))
    })?;
    Ok(parsed.hyphenated().to_string())
}

/// Returns the raw user agent.
#[must_use]
pub fn user_agent(event: &BaseEdxEvent) -> &str {
    &event.agent
}

/// Builds the activity IRI of a video block.
#[must_use]
pub fn video_activity_iri(platform_url: &str, course_id: &str, block_id: &str) -> String {
    format!("{platform_url}/xblock/block-v1:{course_id}-course-v1:+type@video+block@{block_id}")
}

/// Wraps a playback position in seconds as a JSON number, unrounded.
///
/// # Errors
///
/// Returns `ConversionError::InvalidInput` for NaN or infinite values,
/// which JSON cannot represent.
pub fn seconds(field: &str, value: f64) -> Result<Value, ConversionError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| ConversionError::invalid_input(field, format!("{value} is not finite")))
}
