//! Record model for share.
//!
//! Design goals, mirrored from the rest of the crate:
//! - **Version isolation:** each schema family keeps its own personal-
//!   information shape; `PersonalInformation` is a closed tagged set, never
//!   inferred from the data.
//! - **Immutability:** a `Share` is constructed once (from raw fields or a
//!   decoded envelope) and treated as a value thereafter; the fingerprint is
//!   a pure derived property.
//! - **Minimal policy:** models are mostly "dumb" data. Field content is
//!   never validated; an empty public key or exotic UTF-8 text is accepted.
//!
//! The only normalization applied anywhere is the public-key newline strip,
//! performed at construction so that hashing and the envelope both observe
//! the cleaned key.

use serde::{Deserialize, Serialize};

use crate::CURRENT_VERSION;

/// Record classification. Carried metadata only: it never participates in
/// the fingerprint, so it can change without invalidating the digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
    #[default]
    Personal,
    Alias,
}

/// Personal information under the flat (`1.0.x`) schema family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Name group of the structured schema family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Contact group of the structured schema family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Address group of the structured schema family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Social group of the structured schema family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Personal information under the structured (`1.1.x`) schema family.
///
/// Every group and every leaf is optional; absence hashes as the empty
/// string and never changes the tree shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<NameInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialInfo>,
}

/// The personal-information payload, one variant per schema family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalInformation {
    Flat(FlatInfo),
    Structured(StructuredInfo),
}

impl PersonalInformation {
    /// Human-readable shape name, used in mismatch errors.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Flat(_) => "flat",
            Self::Structured(_) => "structured",
        }
    }
}

/// Optional construction parameters for [`Share`].
#[derive(Debug, Clone, Default)]
pub struct ShareOptions {
    /// Schema version string; defaults to [`CURRENT_VERSION`].
    pub version: Option<String>,
    /// Record classification; defaults to `personal`.
    pub kind: ShareKind,
    /// Free-form label; defaults to empty. Never hashed.
    pub tag: String,
}

/// A personal-information record with a stable, content-addressed
/// fingerprint.
///
/// Fields are public for read access but a `Share` must be built through
/// [`Share::new`] / [`Share::with_options`] (or the envelope codec) so the
/// public-key normalization is never skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub pub_key: String,
    pub pi: PersonalInformation,
    pub version: String,
    pub kind: ShareKind,
    pub tag: String,
}

impl Share {
    /// Construct a record with default options (current version, `personal`
    /// kind, empty tag).
    pub fn new(pub_key: impl Into<String>, pi: PersonalInformation) -> Self {
        Self::with_options(pub_key, pi, ShareOptions::default())
    }

    /// Construct a record with explicit options.
    ///
    /// The version string is stored verbatim; an unsupported version is not
    /// rejected here, only at fingerprint time, so such a record can still
    /// be stored and transmitted.
    pub fn with_options(
        pub_key: impl Into<String>,
        pi: PersonalInformation,
        options: ShareOptions,
    ) -> Self {
        Self {
            pub_key: strip_newlines(&pub_key.into()),
            pi,
            version: options
                .version
                .unwrap_or_else(|| CURRENT_VERSION.to_string()),
            kind: options.kind,
            tag: options.tag,
        }
    }
}

/// Remove every `\r` and `\n` from a public-key string. Covers `\r\n`
/// sequences as a consequence.
fn strip_newlines(s: &str) -> String {
    if !s.contains(['\r', '\n']) {
        return s.to_string();
    }
    s.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied() {
        let s = Share::new("KEY1", PersonalInformation::Structured(StructuredInfo::default()));
        assert_eq!(s.version, CURRENT_VERSION);
        assert_eq!(s.kind, ShareKind::Personal);
        assert_eq!(s.tag, "");
    }

    #[test]
    fn pub_key_newlines_stripped_at_construction() {
        let s = Share::new(
            "AB\r\nCD\nEF\r",
            PersonalInformation::Flat(FlatInfo::default()),
        );
        assert_eq!(s.pub_key, "ABCDEF");
    }

    #[test]
    fn options_carried_verbatim() {
        let s = Share::with_options(
            "KEY1",
            PersonalInformation::Flat(FlatInfo::default()),
            ShareOptions {
                version: Some("9.9.9".to_string()),
                kind: ShareKind::Alias,
                tag: "work".to_string(),
            },
        );
        assert_eq!(s.version, "9.9.9");
        assert_eq!(s.kind, ShareKind::Alias);
        assert_eq!(s.tag, "work");
    }
}
