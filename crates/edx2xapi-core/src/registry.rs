//! Tag-based converter selection.

use std::collections::HashMap;
use std::fmt;

use crate::converter::Converter;
use crate::error::ConversionError;
use crate::orchestrator::{convert_dict_event, parse_event};
use crate::statement::Statement;

/// Object-safe view of a [`Converter`] working on untyped payloads.
pub trait EventConverter: Send + Sync {
    /// The converter name (for logging and error reports).
    fn name(&self) -> &'static str;

    /// Types `raw_event` and converts it.
    ///
    /// # Errors
    ///
    /// See [`convert_dict_event`].
    fn convert_value(
        &self,
        raw_event: &serde_json::Value,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError>;
}

impl<C: Converter> EventConverter for C {
    fn name(&self) -> &'static str {
        Converter::name(self)
    }

    fn convert_value(
        &self,
        raw_event: &serde_json::Value,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        convert_dict_event(raw_event, canonical_event, self)
    }
}

/// Maps source-event tags to converters.
///
/// Events are matched on `event_type` first. Request events, whose
/// `event_type` equals `context.path`, fall back to a match on
/// `event_source` so all server page requests share one converter.
#[derive(Default)]
pub struct ConverterRegistry {
    by_event_type: HashMap<&'static str, Box<dyn EventConverter>>,
    by_event_source: HashMap<&'static str, Box<dyn EventConverter>>,
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut event_types: Vec<_> = self.by_event_type.keys().collect();
        event_types.sort();
        let mut event_sources: Vec<_> = self.by_event_source.keys().collect();
        event_sources.sort();
        f.debug_struct("ConverterRegistry")
            .field("event_types", &event_types)
            .field("event_sources", &event_sources)
            .finish()
    }
}

impl ConverterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `converter` for events whose `event_type` is `event_type`.
    /// A later registration for the same tag replaces the earlier one.
    #[must_use]
    pub fn register<C: Converter + 'static>(
        mut self,
        event_type: &'static str,
        converter: C,
    ) -> Self {
        self.by_event_type.insert(event_type, Box::new(converter));
        self
    }

    /// Registers `converter` for request events whose `event_source` is
    /// `event_source` and whose `event_type` matched nothing.
    ///
    /// Only events whose `event_type` is their `context.path` are routed
    /// here; other events from the same source stay unsupported.
    #[must_use]
    pub fn register_source<C: Converter + 'static>(
        mut self,
        event_source: &'static str,
        converter: C,
    ) -> Self {
        self.by_event_source.insert(event_source, Box::new(converter));
        self
    }

    /// Selects the converter for a raw event.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::UnsupportedEvent` if no converter matches.
    pub fn select(
        &self,
        raw_event: &serde_json::Value,
    ) -> Result<&dyn EventConverter, ConversionError> {
        let tag = |key: &str| raw_event.get(key).and_then(serde_json::Value::as_str);
        let event_type = tag("event_type").unwrap_or_default();
        let is_request = raw_event
            .pointer("/context/path")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|path| path == event_type);

        let converter = self.by_event_type.get(event_type).or_else(|| {
            tag("event_source")
                .filter(|_| is_request)
                .and_then(|source| self.by_event_source.get(source))
        });
        match converter {
            Some(converter) => Ok(&**converter),
            None => Err(ConversionError::UnsupportedEvent {
                event_type: event_type.to_owned(),
            }),
        }
    }

    /// Parses, selects, and converts one canonical event string.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::MalformedEvent` for non-JSON input,
    /// `ConversionError::UnsupportedEvent` when nothing matches, or the
    /// selected converter's error.
    pub fn convert_event(&self, canonical_event: &str) -> Result<Statement, ConversionError> {
        let raw_event = parse_event(canonical_event)?;
        self.select(&raw_event)?.convert_value(&raw_event, canonical_event)
    }

    /// Returns the number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_event_type.len() + self.by_event_source.len()
    }

    /// Returns `true` if no converter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
