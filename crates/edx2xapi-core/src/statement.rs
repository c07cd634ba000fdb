//! xAPI statement model.
//!
//! Only the subset of xAPI 1.0.x the converters populate is modelled.
//! Optional blocks serialize as absent, never as `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The xAPI version every statement declares.
pub const XAPI_VERSION: &str = "1.0.0";

/// Language tag used for verb displays and video activity names.
pub const EN_US: &str = "en-US";

/// Localized strings keyed by RFC 5646 language tag.
pub type LanguageMap = BTreeMap<String, String>;

/// IRI-keyed extension values.
pub type Extensions = BTreeMap<String, serde_json::Value>;

/// Builds a single-entry language map.
#[must_use]
pub fn language_map(tag: &str, text: &str) -> LanguageMap {
    BTreeMap::from([(tag.to_owned(), text.to_owned())])
}

/// A complete xAPI statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Deterministic statement identifier.
    pub id: Uuid,
    /// Who performed the action.
    pub actor: Actor,
    /// What was done.
    pub verb: Verb,
    /// What it was done to.
    pub object: Activity,
    /// Outcome extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<StatementResult>,
    /// Contextual extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<StatementContext>,
    /// When the action happened, as recorded by the source event.
    pub timestamp: String,
    /// Always [`XAPI_VERSION`].
    pub version: String,
}

/// An agent identified by a platform account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The account the agent is known by.
    pub account: Account,
}

/// An account on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Platform base URL.
    #[serde(rename = "homePage")]
    pub home_page: String,
    /// Account name on that platform.
    pub name: String,
}

/// An xAPI verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    /// Verb IRI.
    pub id: String,
    /// Human-readable display.
    pub display: LanguageMap,
}

impl Verb {
    /// Creates a verb with an `en-US` display.
    #[must_use]
    pub fn new(id: &str, display: &str) -> Self {
        Self {
            id: id.to_owned(),
            display: language_map(EN_US, display),
        }
    }
}

/// An activity statement object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity IRI.
    pub id: String,
    /// Activity metadata.
    pub definition: ActivityDefinition,
}

/// Activity metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDefinition {
    /// Activity-type IRI.
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Localized activity name.
    pub name: LanguageMap,
}

/// The `result` block of a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    /// Result extensions.
    pub extensions: Extensions,
}

impl StatementResult {
    /// Wraps `extensions`, or returns `None` when there are none.
    #[must_use]
    pub fn from_extensions(extensions: Extensions) -> Option<Self> {
        (!extensions.is_empty()).then_some(Self { extensions })
    }
}

/// The `context` block of a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementContext {
    /// Context extensions.
    pub extensions: Extensions,
}

impl StatementContext {
    /// Wraps `extensions`, or returns `None` when there are none.
    #[must_use]
    pub fn from_extensions(extensions: Extensions) -> Option<Self> {
        (!extensions.is_empty()).then_some(Self { extensions })
    }
}

/// Assembles a [`Statement`] from the parts every converter shares.
#[derive(Debug)]
pub struct StatementBuilder {
    id: Uuid,
    actor: Actor,
    timestamp: String,
    result: Extensions,
    context: Extensions,
}

impl Statement {
    /// Starts a statement with its identity, actor, and timestamp.
    #[must_use]
    pub fn builder(id: Uuid, actor: Actor, timestamp: &str) -> StatementBuilder {
        StatementBuilder {
            id,
            actor,
            timestamp: timestamp.to_owned(),
            result: Extensions::new(),
            context: Extensions::new(),
        }
    }
}

impl StatementBuilder {
    /// Adds a `result` extension.
    #[must_use]
    pub fn result_extension(mut self, iri: &str, value: impl Into<serde_json::Value>) -> Self {
        self.result.insert(iri.to_owned(), value.into());
        self
    }

    /// Adds a `context` extension.
    #[must_use]
    pub fn context_extension(mut self, iri: &str, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(iri.to_owned(), value.into());
        self
    }

    /// Finishes the statement. Empty `result`/`context` blocks are dropped.
    #[must_use]
    pub fn build(self, verb: Verb, object: Activity) -> Statement {
        Statement {
            id: self.id,
            actor: self.actor,
            verb,
            object,
            result: StatementResult::from_extensions(self.result),
            context: StatementContext::from_extensions(self.context),
            timestamp: self.timestamp,
            version: XAPI_VERSION.to_owned(),
        }
    }
}
