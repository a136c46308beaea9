//! share-core
//!
//! Core primitives for share:
//! - Versioned record model (flat and structured personal information)
//! - Deterministic leaf/container hashing (SHA-256, hex-encoded)
//! - Per-version Merkle fingerprint assembly
//! - Portable JSON envelope codec (raw fields only, never the fingerprint)

pub mod envelope;
pub mod errors;
pub mod fingerprint;
pub mod hashing;
pub mod model;
pub mod version;

pub use crate::errors::{ShareError, ShareResult};

/// Schema version stamped onto newly constructed records.
/// This must track the newest supported assembly rule.
pub const CURRENT_VERSION: &str = "1.1.2";

/// Convenience re-exports.
pub mod prelude {
    pub use crate::envelope::{from_envelope, to_envelope};
    pub use crate::hashing::{container_hash, leaf_hash, leaf_hash_opt};
    pub use crate::model::{
        AddressInfo, ContactInfo, FlatInfo, NameInfo, PersonalInformation, Share, ShareKind,
        ShareOptions, SocialInfo, StructuredInfo,
    };
    pub use crate::version::SchemaVersion;
    pub use crate::{ShareError, ShareResult, CURRENT_VERSION};
}
