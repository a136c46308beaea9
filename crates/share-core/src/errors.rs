//! Error types for share-core.
//!
//! The error surface is intentionally small and stable:
//! - `MalformedEnvelope` for structurally invalid codec input
//! - `UnsupportedSchemaVersion` for versions with no known assembly rule
//! - `SchemaMismatch` for a record whose personal information does not
//!   match the shape its own version declares
//! - `Serialization` for envelope encoding failures
//!
//! Field content itself never errors: empty strings, absent optionals, and
//! exotic UTF-8 are all accepted (determinism over validation).

use thiserror::Error;

/// Result alias used throughout share-core.
pub type ShareResult<T> = Result<T, ShareError>;

#[derive(Debug, Error)]
pub enum ShareError {
    /// Envelope input is not a valid record of the expected shape.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The record's declared schema version has no known assembly rule.
    #[error("unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// The record carries personal information of the wrong shape for its
    /// declared version. Only reachable through direct construction; the
    /// envelope codec always pairs version and shape consistently.
    #[error("schema version {version} expects {expected} personal information")]
    SchemaMismatch { version: String, expected: &'static str },

    /// Envelope encoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ShareError {
    pub fn malformed_envelope(msg: impl Into<String>) -> Self {
        ShareError::MalformedEnvelope(msg.into())
    }

    pub fn unsupported_version(version: impl Into<String>) -> Self {
        ShareError::UnsupportedSchemaVersion(version.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        ShareError::Serialization(msg.into())
    }
}
