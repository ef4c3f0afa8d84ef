//! Pointer-target classification.
//!
//! A name resolves to a pointer target, a prefixed string such as
//! `ak$...` (account) or `ok$...` (oracle). The two-letter prefix before
//! the `$` separator decides which pointer-map key the target is stored
//! under. Classification is pure and exhaustive over the registered
//! prefix set; anything else is rejected before a transaction is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Semantic key a pointer target is stored under in the pointer map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKey {
    #[serde(rename = "accountPubkey")]
    AccountPubkey,
    #[serde(rename = "oraclePubkey")]
    OraclePubkey,
}

impl PointerKey {
    /// The wire name used as the pointer-map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PointerKey::AccountPubkey => "accountPubkey",
            PointerKey::OraclePubkey => "oraclePubkey",
        }
    }
}

impl fmt::Display for PointerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a pointer target failed classification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointerError {
    /// Input does not match `two lowercase letters, '$', payload`.
    #[error("not a valid hash: {0}")]
    NotAHash(String),
    /// Well-formed prefix, but not in the registered set.
    #[error("unknown class: {0}")]
    UnknownClass(String),
}

/// Classify a pointer target by its two-letter prefix.
///
/// `ak$...` is an account public key, `ok$...` an oracle public key.
/// Total over valid inputs: every string matching the pattern either maps
/// to a [`PointerKey`] or fails with [`PointerError::UnknownClass`];
/// everything else fails with [`PointerError::NotAHash`].
pub fn classify(target: &str) -> Result<PointerKey, PointerError> {
    let bytes = target.as_bytes();
    let well_formed = bytes.len() > 3
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_lowercase()
        && bytes[2] == b'$';
    if !well_formed {
        return Err(PointerError::NotAHash(target.to_string()));
    }

    match &target[..2] {
        "ak" => Ok(PointerKey::AccountPubkey),
        "ok" => Ok(PointerKey::OraclePubkey),
        prefix => Err(PointerError::UnknownClass(prefix.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_prefix_classifies() {
        assert_eq!(classify("ak$abc"), Ok(PointerKey::AccountPubkey));
    }

    #[test]
    fn oracle_prefix_classifies() {
        assert_eq!(classify("ok$xyz"), Ok(PointerKey::OraclePubkey));
    }

    #[test]
    fn unregistered_prefix_rejected() {
        assert_eq!(
            classify("zz$xyz"),
            Err(PointerError::UnknownClass("zz".to_string()))
        );
    }

    #[test]
    fn missing_separator_rejected() {
        assert_eq!(
            classify("invalid"),
            Err(PointerError::NotAHash("invalid".to_string()))
        );
    }

    #[test]
    fn empty_payload_rejected() {
        assert_eq!(
            classify("ak$"),
            Err(PointerError::NotAHash("ak$".to_string()))
        );
    }

    #[test]
    fn uppercase_prefix_rejected() {
        assert_eq!(
            classify("AK$abc"),
            Err(PointerError::NotAHash("AK$abc".to_string()))
        );
    }

    #[test]
    fn three_letter_prefix_rejected() {
        // 'bad$target' has a '$' in position 3, not 2.
        assert_eq!(
            classify("bad$target"),
            Err(PointerError::NotAHash("bad$target".to_string()))
        );
    }

    #[test]
    fn wire_names_match_pointer_map_keys() {
        assert_eq!(PointerKey::AccountPubkey.as_str(), "accountPubkey");
        assert_eq!(PointerKey::OraclePubkey.as_str(), "oraclePubkey");
    }

    #[test]
    fn serde_serializes_to_wire_name() {
        let json = serde_json::to_string(&PointerKey::OraclePubkey).unwrap();
        assert_eq!(json, "\"oraclePubkey\"");
    }
}
