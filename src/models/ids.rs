//! Strongly-typed entry identifier
//!
//! Entries are keyed by a random v4 UUID so ids stay unique regardless of
//! clock resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "ent-";

/// Unique identifier of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether the hyphenated UUID text starts with `prefix`
    ///
    /// Accepts the short display form (`ent-1a2b3c4d`) as well as a bare
    /// hex prefix.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim();
        let prefix = prefix.strip_prefix(DISPLAY_PREFIX).unwrap_or(prefix);
        !prefix.is_empty() && self.0.to_string().starts_with(&prefix.to_ascii_lowercase())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_creation() {
        let id = EntryId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, EntryId::new());
    }

    #[test]
    fn test_id_display() {
        let id = EntryId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12); // "ent-" + 8 chars
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: EntryId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: EntryId = format!("ent-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_matches_prefix() {
        let id: EntryId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.matches_prefix("ent-550e8400"));
        assert!(id.matches_prefix("550E84"));
        assert!(!id.matches_prefix("ent-"));
        assert!(!id.matches_prefix("660e"));
    }

    #[test]
    fn test_id_serialization() {
        let id = EntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let deserialized: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
