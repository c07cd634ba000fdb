//! Converters from navigation events to page statements.

use edx2xapi_core::converter::{Converter, ConverterConfig};
use edx2xapi_core::error::ConversionError;
use edx2xapi_core::registry::ConverterRegistry;
use edx2xapi_core::statement::{Activity, ActivityDefinition, Statement, Verb, language_map};

use crate::domain::events::{PAGE_CLOSE_EVENT_TYPE, SERVER_EVENT_SOURCE, ServerEvent, UiPageClose};
use crate::domain::vocabulary::{ACTIVITY_TYPE_PAGE, VERB_TERMINATED, VERB_VIEWED};

/// Registers the navigation converters on `registry`.
///
/// Server events are routed by source only when their `event_type` is the
/// request path, so other server-side events stay unsupported.
#[must_use]
pub fn register(registry: ConverterRegistry, config: &ConverterConfig) -> ConverterRegistry {
    registry
        .register(
            PAGE_CLOSE_EVENT_TYPE,
            UiPageCloseToPageTerminated::new(config.clone()),
        )
        .register_source(
            SERVER_EVENT_SOURCE,
            ServerEventToPageViewed::new(config.clone()),
        )
}

fn page_object(id: String) -> Activity {
    Activity {
        id,
        definition: ActivityDefinition {
            activity_type: ACTIVITY_TYPE_PAGE.to_owned(),
            name: language_map("en", "page"),
        },
    }
}

/// Converts `page_close` into a page `terminated` statement.
#[derive(Debug, Clone)]
pub struct UiPageCloseToPageTerminated {
    config: ConverterConfig,
}

impl UiPageCloseToPageTerminated {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for UiPageCloseToPageTerminated {
    type Source = UiPageClose;

    fn name(&self) -> &'static str {
        "UiPageCloseToPageTerminated"
    }

    fn convert(
        &self,
        event: &UiPageClose,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        let page = event
            .base
            .page
            .clone()
            .ok_or_else(|| ConversionError::invalid_input("page", "missing page"))?;
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .build(Verb::new(VERB_TERMINATED, "terminated"), page_object(page)))
    }
}

/// Converts a server request event into a page `viewed` statement.
#[derive(Debug, Clone)]
pub struct ServerEventToPageViewed {
    config: ConverterConfig,
}

impl ServerEventToPageViewed {
    /// Creates the converter.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for ServerEventToPageViewed {
    type Source = ServerEvent;

    fn name(&self) -> &'static str {
        "ServerEventToPageViewed"
    }

    fn convert(
        &self,
        event: &ServerEvent,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError> {
        let page = format!("{}{}", self.config.platform_url(), event.base.event_type);
        Ok(self
            .config
            .statement(&event.base, canonical_event)
            .build(Verb::new(VERB_VIEWED, "viewed"), page_object(page)))
    }
}
