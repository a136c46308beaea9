//! Deterministic hashing primitives for share.
//!
//! Two rules build the whole fingerprint tree:
//! - a leaf hashes the raw UTF-8 bytes of one scalar field
//! - a container hashes the separator-free concatenation of its children's
//!   hex digests, in the exact order supplied
//!
//! All digests are SHA-256 rendered as 64-character lowercase hex. Both
//! functions are pure: no I/O, no shared state, no randomness.

use sha2::{Digest, Sha256};

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Hash a single scalar field value.
///
/// The empty string is a valid input with a fixed digest; it must not be
/// special-cased, since absent optional fields hash through it.
pub fn leaf_hash(value: &str) -> String {
    sha256_hex(value.as_bytes())
}

/// Hash an optional scalar field value, treating absence as the empty string.
///
/// This is the single place the "absence == empty string" invariant is
/// enforced; assembly rules never branch on presence.
pub fn leaf_hash_opt(value: Option<&str>) -> String {
    leaf_hash(value.unwrap_or(""))
}

/// Hash an ordered sequence of child digests.
///
/// Order is semantically significant: permuting children changes the digest.
/// An empty sequence is legal (it hashes the empty string), although no
/// schema version produces one.
pub fn container_hash<'a, I>(children: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buf = String::new();
    for child in children {
        buf.push_str(child);
    }
    sha256_hex(buf.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known SHA-256 vectors.
    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn leaf_matches_known_vectors() {
        assert_eq!(leaf_hash(""), EMPTY);
        assert_eq!(leaf_hash("abc"), ABC);
    }

    #[test]
    fn absent_equals_empty() {
        assert_eq!(leaf_hash_opt(None), leaf_hash(""));
        assert_eq!(leaf_hash_opt(Some("")), leaf_hash(""));
        assert_eq!(leaf_hash_opt(Some("x")), leaf_hash("x"));
    }

    #[test]
    fn container_concatenates_in_order() {
        let a = leaf_hash("a");
        let b = leaf_hash("b");
        let joined = format!("{a}{b}");
        assert_eq!(container_hash([a.as_str(), b.as_str()]), leaf_hash(&joined));
        assert_ne!(
            container_hash([a.as_str(), b.as_str()]),
            container_hash([b.as_str(), a.as_str()])
        );
    }

    #[test]
    fn empty_container_hashes_empty_string() {
        assert_eq!(container_hash([]), EMPTY);
    }
}
