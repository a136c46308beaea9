//! Portable JSON envelope codec.
//!
//! The envelope carries exactly the record's raw fields; the fingerprint is
//! never serialized and is always recomputed by the receiver. Wire keys
//! follow the historical format: `pi`, `pubKey`, `version`, and, in the
//! structured era only, `type` and `tag`.
//!
//! Decoding is permissive about content and strict about structure:
//! - unknown keys are ignored
//! - missing optional fields become absent (and hash as empty strings)
//! - a missing `version` defaults to the current version
//! - anything not parseable as the expected record shape is
//!   `MalformedEnvelope`
//!
//! A record with an unrecognized version is still decodable (its `pi` is
//! read under the current structured shape) so it can be stored and
//! relayed; only fingerprinting rejects it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ShareError, ShareResult};
use crate::model::{
    FlatInfo, PersonalInformation, Share, ShareKind, ShareOptions, StructuredInfo,
};
use crate::version::SchemaVersion;
use crate::CURRENT_VERSION;

#[derive(Serialize)]
struct FlatEnvelope<'a> {
    pi: &'a FlatInfo,
    #[serde(rename = "pubKey")]
    pub_key: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct StructuredEnvelope<'a> {
    pi: &'a StructuredInfo,
    #[serde(rename = "pubKey")]
    pub_key: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    kind: ShareKind,
    tag: &'a str,
}

#[derive(Deserialize)]
struct EnvelopeHead {
    #[serde(default)]
    version: Option<String>,
    #[serde(rename = "pubKey")]
    pub_key: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<ShareKind>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    pi: Option<Value>,
}

/// Encode a record to its envelope text.
pub fn to_envelope(share: &Share) -> ShareResult<String> {
    let out = match &share.pi {
        PersonalInformation::Flat(info) => serde_json::to_string(&FlatEnvelope {
            pi: info,
            pub_key: &share.pub_key,
            version: &share.version,
        }),
        PersonalInformation::Structured(info) => serde_json::to_string(&StructuredEnvelope {
            pi: info,
            pub_key: &share.pub_key,
            version: &share.version,
            kind: share.kind,
            tag: &share.tag,
        }),
    };
    out.map_err(|e| ShareError::serialization(format!("failed to encode envelope: {e}")))
}

/// Decode an envelope text into a record.
pub fn from_envelope(text: &str) -> ShareResult<Share> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ShareError::malformed_envelope(format!("invalid json: {e}")))?;
    if !value.is_object() {
        return Err(ShareError::malformed_envelope("expected a json object"));
    }

    let head: EnvelopeHead = serde_json::from_value(value)
        .map_err(|e| ShareError::malformed_envelope(format!("invalid record: {e}")))?;

    let pub_key = head
        .pub_key
        .ok_or_else(|| ShareError::malformed_envelope("missing pubKey"))?;
    let version = head
        .version
        .unwrap_or_else(|| CURRENT_VERSION.to_string());

    // The declared version selects the pi shape. Unrecognized versions fall
    // back to the current structured shape so the record stays decodable;
    // fingerprinting still rejects them.
    let pi = match SchemaVersion::parse(&version) {
        Ok(SchemaVersion::Flat) => PersonalInformation::Flat(parse_pi(head.pi)?),
        _ => PersonalInformation::Structured(parse_pi(head.pi)?),
    };

    Ok(Share::with_options(
        pub_key,
        pi,
        ShareOptions {
            version: Some(version),
            kind: head.kind.unwrap_or_default(),
            tag: head.tag.unwrap_or_default(),
        },
    ))
}

fn parse_pi<T>(pi: Option<Value>) -> ShareResult<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match pi {
        None | Some(Value::Null) => Ok(T::default()),
        Some(v) => serde_json::from_value(v)
            .map_err(|e| ShareError::malformed_envelope(format!("invalid pi: {e}"))),
    }
}

impl Share {
    /// Encode this record to its envelope text. See [`to_envelope`].
    pub fn to_envelope(&self) -> ShareResult<String> {
        to_envelope(self)
    }

    /// Decode a record from envelope text. See [`from_envelope`].
    pub fn from_envelope(text: &str) -> ShareResult<Self> {
        from_envelope(text)
    }
}
