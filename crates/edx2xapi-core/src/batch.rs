//! Conversion of event batches.

use thiserror::Error;
use tracing::debug;

use crate::error::ConversionError;
use crate::orchestrator::parse_event;
use crate::registry::ConverterRegistry;
use crate::statement::Statement;

/// Converter name reported when no converter was selected.
pub const NO_CONVERTER: &str = "none";

/// A conversion failure inside a batch.
#[derive(Debug, Error)]
#[error("event {index} failed in {converter}: {source}")]
pub struct BatchError {
    /// Zero-based position of the event in the batch.
    pub index: usize,
    /// Name of the converter that failed, or [`NO_CONVERTER`].
    pub converter: &'static str,
    /// The underlying failure.
    pub source: ConversionError,
}

impl BatchError {
    /// Returns `true` if no converter is registered for the event.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.source, ConversionError::UnsupportedEvent { .. })
    }
}

/// Converts each canonical event string in `events`, in order.
///
/// Every input yields exactly one output. Failures are tagged with the event
/// index and converter name and do not affect the other events.
pub fn convert_batch<'a, I, S>(
    registry: &'a ConverterRegistry,
    events: I,
) -> impl Iterator<Item = Result<Statement, BatchError>> + 'a
where
    I: IntoIterator<Item = S>,
    I::IntoIter: 'a,
    S: AsRef<str>,
{
    events
        .into_iter()
        .enumerate()
        .map(move |(index, event)| convert_one(registry, index, event.as_ref()))
}

fn convert_one(
    registry: &ConverterRegistry,
    index: usize,
    canonical_event: &str,
) -> Result<Statement, BatchError> {
    let failed = |converter, source| BatchError {
        index,
        converter,
        source,
    };

    let raw_event = parse_event(canonical_event).map_err(|e| failed(NO_CONVERTER, e))?;
    let converter = registry
        .select(&raw_event)
        .map_err(|e| failed(NO_CONVERTER, e))?;
    let statement = converter
        .convert_value(&raw_event, canonical_event)
        .map_err(|e| failed(converter.name(), e))?;
    debug!(index, converter = converter.name(), "converted batch event");
    Ok(statement)
}
