//! Identifier types for the naming system.
//!
//! All of these are thin newtypes over the node's string encodings. The
//! client never parses them beyond prefix checks; the node is the
//! authority on their internal structure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash identifying a registered name on the ledger.
///
/// Produced by the node when a name is claimed; opaque to the client.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameHash(String);

impl NameHash {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NameHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An account public key, always prefixed with `ak$`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey(String);

impl AccountKey {
    /// The standard prefix for account public keys.
    pub const PREFIX: &'static str = "ak$";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this key carries the account prefix.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A commitment hash, always prefixed with `cm$`.
///
/// Derived one-way from `(name, salt)`; submitted during preclaim to
/// reserve intent without revealing the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(String);

impl Commitment {
    /// The standard prefix for commitment hashes.
    pub const PREFIX: &'static str = "cm$";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The secret salt paired with a name in the preclaim commitment.
///
/// Generated once per preclaim and revealed in the matching claim. The
/// ledger rejects a claim whose salt does not reproduce the committed
/// hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Salt(u64);

impl Salt {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Little-endian byte representation, as fed into the commitment hash.
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A name in its on-chain wire form: `nm$` + base58check(utf-8 bytes).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedName(String);

impl EncodedName {
    /// The standard prefix for encoded names.
    pub const PREFIX: &'static str = "nm$";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_key_prefix_validation() {
        assert!(AccountKey::new("ak$abc123").is_valid());
        assert!(!AccountKey::new("ok$abc123").is_valid());
        assert!(!AccountKey::new("ak$").is_valid());
    }

    #[test]
    fn salt_le_bytes_roundtrip() {
        let salt = Salt::new(0x0102_0304_0506_0708);
        assert_eq!(
            salt.to_le_bytes(),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(Salt::new(u64::from_le_bytes(salt.to_le_bytes())), salt);
    }

    #[test]
    fn name_hash_display_is_raw() {
        let hash = NameHash::new("nm$deadbeef");
        assert_eq!(hash.to_string(), "nm$deadbeef");
        assert_eq!(hash.as_str(), "nm$deadbeef");
    }

    #[test]
    fn salt_serde_is_plain_integer() {
        let salt = Salt::new(42);
        let json = serde_json::to_string(&salt).unwrap();
        assert_eq!(json, "42");
        let back: Salt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, salt);
    }
}
