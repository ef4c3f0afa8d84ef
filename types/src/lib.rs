//! Fundamental types for the AENS client.
//!
//! Value types shared across the workspace:
//! - Name identifiers: [`NameHash`], [`EncodedName`]
//! - Commitment-handshake values: [`Commitment`], [`Salt`]
//! - Account identifiers: [`AccountKey`]
//! - Pointer classification: [`PointerKey`], [`classify`]
//! - Per-call TTL configuration: [`TxOptions`], [`TxOverrides`]

pub mod name;
pub mod options;
pub mod pointer;

pub use name::{AccountKey, Commitment, EncodedName, NameHash, Salt};
pub use options::{TxOptions, TxOverrides};
pub use pointer::{classify, PointerError, PointerKey};
