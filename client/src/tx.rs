//! Typed name transactions.
//!
//! These are the wire payloads the facade hands to the node for
//! broadcast. Field names follow the node's JSON conventions; the merged
//! TTL options are flattened into every transaction body.

use aens_types::{AccountKey, Commitment, EncodedName, NameHash, Salt, TxOptions};
use serde::{Deserialize, Serialize};

/// Reserve a commitment without revealing the name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamePreclaimTx {
    pub account: AccountKey,
    pub commitment: Commitment,
    #[serde(flatten)]
    pub options: TxOptions,
}

/// Reveal the name and salt behind an earlier commitment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NameClaimTx {
    pub account: AccountKey,
    pub name: EncodedName,
    #[serde(rename = "nameSalt")]
    pub name_salt: Salt,
    #[serde(flatten)]
    pub options: TxOptions,
}

/// Point a registration at a new target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NameUpdateTx {
    #[serde(rename = "nameHash")]
    pub name_hash: NameHash,
    pub account: AccountKey,
    /// Pointer map serialized to its JSON transport string.
    pub pointers: String,
    #[serde(flatten)]
    pub options: TxOptions,
}

/// Hand a registration over to another account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NameTransferTx {
    #[serde(rename = "nameHash")]
    pub name_hash: NameHash,
    pub account: AccountKey,
    #[serde(rename = "recipientAccount")]
    pub recipient_account: AccountKey,
    #[serde(flatten)]
    pub options: TxOptions,
}

/// Any of the four name transactions, tagged for broadcast.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NameTx {
    NamePreclaim(NamePreclaimTx),
    NameClaim(NameClaimTx),
    NameUpdate(NameUpdateTx),
    NameTransfer(NameTransferTx),
}

impl NameTx {
    /// The wire tag of this transaction, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            NameTx::NamePreclaim(_) => "name_preclaim",
            NameTx::NameClaim(_) => "name_claim",
            NameTx::NameUpdate(_) => "name_update",
            NameTx::NameTransfer(_) => "name_transfer",
        }
    }
}
