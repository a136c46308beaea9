//! Fingerprint assembly.
//!
//! Builds the full Merkle tree for a record bottom-up and returns the root
//! container's digest. The record's own version string selects the assembly
//! rule; the tree shape for a given version is fixed regardless of which
//! optional fields are populated, so two sparse records of the same version
//! remain hash-comparable.
//!
//! Intermediate node digests are discarded; this is a single full-tree root
//! computation, not a proof-carrying Merkle tree.

use crate::errors::{ShareError, ShareResult};
use crate::hashing::{container_hash, leaf_hash, leaf_hash_opt};
use crate::model::{PersonalInformation, Share, StructuredInfo};
use crate::version::SchemaVersion;

impl Share {
    /// Compute the record's fingerprint: the root container digest of the
    /// version-specific tree.
    ///
    /// Pure and deterministic; recomputed on every call. Fails with
    /// `UnsupportedSchemaVersion` when the record's declared version has no
    /// assembly rule, and with `SchemaMismatch` when the personal
    /// information is the wrong shape for that version.
    pub fn fingerprint(&self) -> ShareResult<String> {
        let version = SchemaVersion::parse(&self.version)?;
        match (version, &self.pi) {
            (SchemaVersion::Flat, PersonalInformation::Flat(info)) => {
                let name = container_hash([leaf_hash_opt(info.name.as_deref()).as_str()]);
                let phone = container_hash([leaf_hash_opt(info.phone.as_deref()).as_str()]);
                let pubkey = pubkey_container(&self.pub_key);
                Ok(container_hash([
                    name.as_str(),
                    phone.as_str(),
                    pubkey.as_str(),
                ]))
            }
            (SchemaVersion::Structured, PersonalInformation::Structured(info)) => {
                Ok(structured_root(info, &self.pub_key))
            }
            (version, _) => Err(ShareError::SchemaMismatch {
                version: self.version.clone(),
                expected: version.expected_shape(),
            }),
        }
    }
}

fn pubkey_container(pub_key: &str) -> String {
    container_hash([leaf_hash(pub_key).as_str()])
}

fn structured_root(info: &StructuredInfo, pub_key: &str) -> String {
    let name = info.name.clone().unwrap_or_default();
    let contact = info.contact.clone().unwrap_or_default();
    let address = info.address.clone().unwrap_or_default();
    let social = info.social.clone().unwrap_or_default();

    // Group containers in field-declaration order; leaf order within each
    // group is likewise fixed.
    let name_container = container_hash([
        leaf_hash_opt(name.first_name.as_deref()).as_str(),
        leaf_hash_opt(name.last_name.as_deref()).as_str(),
    ]);
    let contact_container = container_hash([
        leaf_hash_opt(contact.email.as_deref()).as_str(),
        leaf_hash_opt(contact.phone.as_deref()).as_str(),
    ]);
    let address_container = container_hash([
        leaf_hash_opt(address.address.as_deref()).as_str(),
        leaf_hash_opt(address.city.as_deref()).as_str(),
        leaf_hash_opt(address.state.as_deref()).as_str(),
        leaf_hash_opt(address.zip.as_deref()).as_str(),
    ]);
    let social_container = container_hash([
        leaf_hash_opt(social.facebook.as_deref()).as_str(),
        leaf_hash_opt(social.twitter.as_deref()).as_str(),
        leaf_hash_opt(social.instagram.as_deref()).as_str(),
    ]);
    let pubkey = pubkey_container(pub_key);

    container_hash([
        name_container.as_str(),
        contact_container.as_str(),
        address_container.as_str(),
        social_container.as_str(),
        pubkey.as_str(),
    ])
}
