//! Cryptographic primitives for the AENS client.
//!
//! - **Base58-check** encoding for on-chain identifiers (names, commitments)
//! - **Blake2b** commitment hashing for the preclaim/claim handshake
//! - Cryptographically strong salt generation

pub mod base58;
pub mod commitment;
pub mod salt;

pub use base58::{decode_base58check, encode_base58check};
pub use commitment::commitment_hash;
pub use salt::random_salt;
