//! Shared edX source-event types.
//!
//! These are the typed fields every tracking-log event carries. Concrete
//! event kinds flatten [`BaseEdxEvent`] and add their own `event` payload.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConversionError;

/// Trait that all typed source events implement.
pub trait SourceEvent: DeserializeOwned + Send + Sync + fmt::Debug {
    /// Returns the fields shared by every tracking-log event.
    fn base(&self) -> &BaseEdxEvent;
}

/// Course context attached to every tracking-log event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdxContext {
    /// Course key, e.g. `course-v1:org+course+run`. Empty outside a course.
    pub course_id: String,
    /// Organization owning the course.
    pub org_id: String,
    /// Platform user id. Integer and null values are normalized to text;
    /// anonymous events carry an empty string.
    #[serde(deserialize_with = "user_id_text")]
    pub user_id: String,
    /// Request path that emitted the event.
    #[serde(default)]
    pub path: String,
}

/// Fields common to browser and server tracking-log events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEdxEvent {
    /// Username of the learner, empty for anonymous traffic.
    #[serde(default)]
    pub username: String,
    /// Client IP address.
    #[serde(default)]
    pub ip: String,
    /// Raw `User-Agent` header.
    pub agent: String,
    /// Host the request was served from.
    #[serde(default)]
    pub host: String,
    /// Raw `Referer` header.
    #[serde(default)]
    pub referer: String,
    /// Raw `Accept-Language` header.
    #[serde(default)]
    pub accept_language: String,
    /// Course context.
    pub context: EdxContext,
    /// Time the event occurred.
    pub time: EventTime,
    /// Page URL the browser event was emitted from.
    #[serde(default)]
    pub page: Option<String>,
    /// Browser session key.
    #[serde(default)]
    pub session: Option<String>,
    /// `browser`, `server` or `mobile`.
    #[serde(default)]
    pub event_source: String,
    /// Event tag; the request path for server events.
    #[serde(default)]
    pub event_type: String,
}

/// Timestamp of a tracking-log event.
///
/// The raw text is kept byte-for-byte so statements can carry it unchanged;
/// the parsed instant is available for callers that need ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTime {
    raw: String,
    instant: DateTime<Utc>,
}

impl EventTime {
    /// Parses an RFC 3339 timestamp, or a naive ISO 8601 timestamp which is
    /// read as UTC.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidInput` if `raw` is neither form.
    pub fn parse(raw: &str) -> Result<Self, ConversionError> {
        let instant = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
            })
            .map_err(|e| ConversionError::invalid_input("time", e))?;
        Ok(Self {
            raw: raw.to_owned(),
            instant,
        })
    }

    /// Returns the timestamp exactly as it appeared in the event.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed instant in UTC.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

/// Deserializes an `event` payload given either as a nested JSON object or
/// as a JSON-encoded string, as browser events emit it.
///
/// # Errors
///
/// Returns the deserializer's error if the payload (or the decoded string)
/// does not match `T`.
pub fn json_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => serde_json::from_str(&text).map_err(de::Error::custom),
        other => serde_json::from_value(other).map_err(de::Error::custom),
    }
}

fn user_id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UserId {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<UserId>::deserialize(deserializer)? {
        Some(UserId::Text(text)) => text,
        Some(UserId::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
