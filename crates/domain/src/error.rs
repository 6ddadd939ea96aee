//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeviceHubError`] via `From`. The variants are the only classification
//! the HTTP layer looks at when choosing a status code.

use std::num::ParseIntError;

/// Top-level error for every devicehub operation.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHubError {
    /// A payload was malformed or broke a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An identifier could not be parsed.
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Payload or invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    /// The payload could not be decoded at all.
    #[error("{0}")]
    Malformed(String),
}

/// A path or query identifier that is not a valid 64-bit integer.
#[derive(Debug, thiserror::Error)]
pub enum InvalidIdError {
    /// The raw value decoded but is not a base-10 `i64`.
    #[error("invalid id {value:?}: {source}")]
    NotAnInteger {
        value: String,
        source: ParseIntError,
    },

    /// The raw value could not be decoded into text at all.
    #[error("invalid id: {0}")]
    Undecodable(String),
}

/// Lookup of a record that does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err: DeviceHubError = NotFoundError {
            entity: "Device",
            id: "42".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Device 42 not found");
    }

    #[test]
    fn should_include_raw_value_in_invalid_id_message() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = InvalidIdError::NotAnInteger {
            value: "abc".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid id \"abc\""));
    }

    #[test]
    fn should_describe_undecodable_id() {
        let err: DeviceHubError =
            InvalidIdError::Undecodable("Invalid UTF-8 in `id`".into()).into();
        assert_eq!(err.to_string(), "invalid id: Invalid UTF-8 in `id`");
    }

    #[test]
    fn should_pass_malformed_message_through_unchanged() {
        let err: DeviceHubError = ValidationError::Malformed("missing field `name`".into()).into();
        assert_eq!(err.to_string(), "missing field `name`");
    }

    #[test]
    fn should_prefix_storage_errors() {
        let err = DeviceHubError::Storage("disk full".into());
        assert_eq!(err.to_string(), "storage error: disk full");
    }
}
