//! Schema version parsing and dispatch.
//!
//! A record carries its version as data; the version alone selects which
//! tree-assembly rule runs. There is no structural sniffing and no silent
//! mapping of unknown versions onto the nearest known one.

use crate::errors::{ShareError, ShareResult};

/// Known tree-shape families, selected by the `major.minor` prefix of the
/// record's semantic-version string.
///
/// The historical `1.0` and `1.0.1` releases differ only in whether the host
/// platform exposed hashing synchronously or behind an async call chain;
/// their digests, tree shape, and ordering are identical, so they share the
/// flat rule here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `1.0.x`: two scalar fields (`name`, `phone`).
    Flat,
    /// `1.1.x`: four optional groups plus the public key.
    Structured,
}

impl SchemaVersion {
    /// Parse a semantic-version string (e.g. "1.0", "1.0.1", "1.1.2").
    pub fn parse(s: &str) -> ShareResult<Self> {
        let mut parts = s.split('.');
        let major = parts.next();
        let minor = parts.next();
        match (major, minor) {
            (Some("1"), Some("0")) => Ok(Self::Flat),
            (Some("1"), Some("1")) => Ok(Self::Structured),
            _ => Err(ShareError::unsupported_version(s)),
        }
    }

    /// Human-readable name of the personal-information shape this family
    /// expects, used in mismatch errors.
    pub fn expected_shape(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Structured => "structured",
        }
    }
}
