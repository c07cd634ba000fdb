//! Source events for page navigation.

use edx2xapi_core::source::{BaseEdxEvent, SourceEvent};
use serde::{Deserialize, Serialize};

/// Event type identifier for [`UiPageClose`].
pub const PAGE_CLOSE_EVENT_TYPE: &str = "page_close";

/// Event source identifier for [`ServerEvent`].
pub const SERVER_EVENT_SOURCE: &str = "server";

/// The learner closed or navigated away from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPageClose {
    /// Common tracking-log fields. `page` holds the closed page URL.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Browser event name.
    #[serde(default)]
    pub name: String,
    /// Event payload, empty for this event.
    #[serde(default)]
    pub event: serde_json::Value,
}

/// A request served by the platform. `event_type` is the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEvent {
    /// Common tracking-log fields.
    #[serde(flatten)]
    pub base: BaseEdxEvent,
    /// Request parameters.
    #[serde(default)]
    pub event: serde_json::Value,
}

impl SourceEvent for UiPageClose {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}

impl SourceEvent for ServerEvent {
    fn base(&self) -> &BaseEdxEvent {
        &self.base
    }
}
