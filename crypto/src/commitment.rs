//! Commitment hashing for the preclaim/claim handshake.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use aens_types::{Commitment, Salt};

use crate::base58::encode_base58check;

type Blake2b256 = Blake2b<U32>;

/// Compute the preclaim commitment for a `(name, salt)` pair.
///
/// `cm$` + base58check(Blake2b-256(name_bytes ‖ salt_le_bytes)).
///
/// One-way and deterministic: the same pair always yields the same
/// commitment, and the name cannot be recovered from it. The claim step
/// reveals both inputs so the ledger can reproduce this hash.
pub fn commitment_hash(name: &str, salt: Salt) -> Commitment {
    let mut hasher = Blake2b256::new();
    hasher.update(name.as_bytes());
    hasher.update(salt.to_le_bytes());
    let digest = hasher.finalize();
    Commitment::new(format!(
        "{}{}",
        Commitment::PREFIX,
        encode_base58check(&digest)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_inputs() {
        let salt = Salt::new(12345);
        assert_eq!(
            commitment_hash("example.test", salt),
            commitment_hash("example.test", salt)
        );
    }

    #[test]
    fn different_names_different_commitments() {
        let salt = Salt::new(12345);
        assert_ne!(
            commitment_hash("alpha.test", salt),
            commitment_hash("beta.test", salt)
        );
    }

    #[test]
    fn different_salts_different_commitments() {
        assert_ne!(
            commitment_hash("example.test", Salt::new(1)),
            commitment_hash("example.test", Salt::new(2))
        );
    }

    #[test]
    fn commitment_carries_prefix() {
        let commitment = commitment_hash("example.test", Salt::new(7));
        assert!(commitment.as_str().starts_with(Commitment::PREFIX));
        assert!(commitment.as_str().len() > Commitment::PREFIX.len());
    }

    #[test]
    fn name_and_salt_bytes_not_interchangeable() {
        // "ab" + salt bytes must not collide with "a" + ("b"-led salt).
        let c1 = commitment_hash("ab", Salt::new(0));
        let c2 = commitment_hash("a", Salt::new(b'b' as u64));
        assert_ne!(c1, c2);
    }
}
