//! Orchestration entry points.
//!
//! These pair a raw payload with a converter: the payload is typed into the
//! converter's source event and the converter's statement is returned
//! unchanged.

use serde::Deserialize;
use tracing::debug;

use crate::converter::Converter;
use crate::error::ConversionError;
use crate::statement::Statement;

/// Converts a raw event with `converter`.
///
/// `canonical_event` must be the exact string `raw_event` was parsed from.
///
/// # Errors
///
/// Returns `ConversionError::InvalidInput` if `raw_event` does not match the
/// converter's source type, or whatever the converter itself reports.
pub fn convert_dict_event<C>(
    raw_event: &serde_json::Value,
    canonical_event: &str,
    converter: &C,
) -> Result<Statement, ConversionError>
where
    C: Converter + ?Sized,
{
    let event = C::Source::deserialize(raw_event)
        .map_err(|e| ConversionError::invalid_input("payload", e))?;
    let statement = converter.convert(&event, canonical_event)?;
    debug!(
        converter = converter.name(),
        statement_id = %statement.id,
        "converted event"
    );
    Ok(statement)
}

/// Parses `canonical_event` and converts it with `converter`.
///
/// # Errors
///
/// Returns `ConversionError::MalformedEvent` if `canonical_event` is not
/// JSON, otherwise as [`convert_dict_event`].
pub fn convert_str_event<C>(
    canonical_event: &str,
    converter: &C,
) -> Result<Statement, ConversionError>
where
    C: Converter + ?Sized,
{
    let raw_event = parse_event(canonical_event)?;
    convert_dict_event(&raw_event, canonical_event, converter)
}

/// Parses a canonical event string into a JSON value.
///
/// # Errors
///
/// Returns `ConversionError::MalformedEvent` if the string is not JSON.
pub fn parse_event(canonical_event: &str) -> Result<serde_json::Value, ConversionError> {
    serde_json::from_str(canonical_event)
        .map_err(|e| ConversionError::MalformedEvent(e.to_string()))
}
