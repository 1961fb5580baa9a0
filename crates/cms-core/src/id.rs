//! Identifier scheme shared by every resource.
//!
//! The representation is picked per deployment with the `uuid-ids` feature:
//! store-assigned `BIGINT` keys by default, client-opaque UUIDs otherwise.
//! Code outside this module only relies on [`RecordId`] being a comparable,
//! printable, parseable value.

use crate::error::DomainError;

#[cfg(not(feature = "uuid-ids"))]
mod scheme {
    /// Primary key of every resource row.
    pub type RecordId = i64;

    /// Identifiers are assigned by the store on insert.
    pub fn generate() -> Option<RecordId> {
        None
    }

    /// Deterministic identifier for the `n`-th record of a sequence.
    pub fn from_seq(n: u64) -> RecordId {
        n as RecordId
    }
}

#[cfg(feature = "uuid-ids")]
mod scheme {
    use uuid::Uuid;

    /// Primary key of every resource row.
    pub type RecordId = Uuid;

    /// Identifiers are generated by the application before insert.
    pub fn generate() -> Option<RecordId> {
        Some(Uuid::new_v4())
    }

    /// Deterministic identifier for the `n`-th record of a sequence.
    pub fn from_seq(n: u64) -> RecordId {
        Uuid::from_u128(u128::from(n))
    }
}

pub use scheme::{RecordId, from_seq, generate};

/// Parse an identifier taken from a path or query string.
///
/// `entity` names the resource in the error message, e.g. `"blog"`.
pub fn parse_id(raw: &str, entity: &str) -> Result<RecordId, DomainError> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_| DomainError::invalid(format!("Invalid {entity} ID format")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_what_it_prints() {
        let id = from_seq(7);
        assert_eq!(parse_id(&id.to_string(), "blog").unwrap(), id);
    }

    #[test]
    fn rejects_malformed_identifiers() {
        let err = parse_id("not-an-id", "category").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(ref m) if m == "Invalid category ID format"));
    }

    #[test]
    fn sequence_ids_are_distinct_and_ordered() {
        assert!(from_seq(1) < from_seq(2));
    }
}
