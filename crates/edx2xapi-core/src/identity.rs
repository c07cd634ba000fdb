//! Deterministic statement identity.
//!
//! Statement ids are name-based (version 5) UUIDs derived from a namespace
//! and the canonical serialized event. Re-delivering the same raw event
//! therefore always yields the same statement id, which downstream stores
//! rely on for deduplication.

use uuid::Uuid;

use crate::error::ConversionError;

/// Derives the statement id for `canonical_event` under `namespace`.
///
/// `canonical_event` must be the exact string the event was received as.
/// Re-serializing a parsed event can reorder keys or change number
/// formatting, which would change the derived id.
#[must_use]
pub fn generate_id(namespace: Uuid, canonical_event: &str) -> Uuid {
    Uuid::new_v5(&namespace, canonical_event.as_bytes())
}

/// Parses a textual UUID namespace.
///
/// # Errors
///
/// Returns `ConversionError::IdentityGeneration` if `namespace` is not a UUID.
pub fn parse_namespace(namespace: &str) -> Result<Uuid, ConversionError> {
    Uuid::parse_str(namespace).map_err(|e| {
        ConversionError::IdentityGeneration(format!("invalid uuid namespace `{namespace}`: {e}"))
    })
}
