//! Converter contract.

use url::Url;
use uuid::Uuid;

use crate::error::ConversionError;
use crate::identity::{generate_id, parse_namespace};
use crate::source::{BaseEdxEvent, SourceEvent};
use crate::statement::{Account, Actor, Statement, StatementBuilder};

/// Immutable settings shared by every converter instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    uuid_namespace: Uuid,
    platform_url: String,
}

impl ConverterConfig {
    /// Creates a configuration from a namespace and an already-checked
    /// platform URL.
    #[must_use]
    pub fn new(uuid_namespace: Uuid, platform_url: impl Into<String>) -> Self {
        Self {
            uuid_namespace,
            platform_url: platform_url.into(),
        }
    }

    /// Parses and checks textual settings.
    ///
    /// The platform URL is kept exactly as given; it is only checked to be
    /// an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::IdentityGeneration` for a malformed
    /// namespace and `ConversionError::InvalidPlatformUrl` for a URL that
    /// does not parse.
    pub fn parse(uuid_namespace: &str, platform_url: &str) -> Result<Self, ConversionError> {
        let namespace = parse_namespace(uuid_namespace)?;
        Url::parse(platform_url).map_err(|e| ConversionError::InvalidPlatformUrl {
            url: platform_url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(namespace, platform_url))
    }

    /// Returns the namespace statement ids are derived under.
    #[must_use]
    pub fn uuid_namespace(&self) -> Uuid {
        self.uuid_namespace
    }

    /// Returns the platform base URL.
    #[must_use]
    pub fn platform_url(&self) -> &str {
        &self.platform_url
    }

    /// Derives the statement id for a canonical event string.
    #[must_use]
    pub fn statement_id(&self, canonical_event: &str) -> Uuid {
        generate_id(self.uuid_namespace, canonical_event)
    }

    /// Builds the account actor for a platform user.
    #[must_use]
    pub fn actor(&self, user_id: &str) -> Actor {
        Actor {
            account: Account {
                home_page: self.platform_url.clone(),
                name: user_id.to_owned(),
            },
        }
    }

    /// Starts a statement with the id, actor, and timestamp every converter
    /// fills the same way.
    #[must_use]
    pub fn statement(&self, event: &BaseEdxEvent, canonical_event: &str) -> StatementBuilder {
        Statement::builder(
            self.statement_id(canonical_event),
            self.actor(&event.context.user_id),
            event.time.as_str(),
        )
    }
}

/// Trait that every concrete converter implements.
///
/// A converter maps exactly one source event type onto exactly one xAPI
/// verb. It holds only its [`ConverterConfig`] and can be shared across
/// threads.
pub trait Converter: Send + Sync {
    /// The typed source event this converter accepts.
    type Source: SourceEvent;

    /// The converter name (for logging and error reports).
    fn name(&self) -> &'static str;

    /// Converts one typed event into a statement.
    ///
    /// `canonical_event` is the exact string the event was received as; it
    /// seeds the statement id.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidInput` if the event violates the
    /// typed input contract (for instance a session that is not a UUID).
    fn convert(
        &self,
        event: &Self::Source,
        canonical_event: &str,
    ) -> Result<Statement, ConversionError>;
}
