//! Transaction building helpers.
//!
//! Pure constructors over merged options; signing and fee handling live
//! in the node.

use aens_types::{AccountKey, Commitment, EncodedName, NameHash, Salt, TxOptions};

use crate::tx::{NameClaimTx, NamePreclaimTx, NameTransferTx, NameUpdateTx};

/// Build a preclaim transaction carrying the commitment hash.
pub fn build_preclaim_tx(
    account: AccountKey,
    commitment: Commitment,
    options: TxOptions,
) -> NamePreclaimTx {
    NamePreclaimTx {
        account,
        commitment,
        options,
    }
}

/// Build a claim transaction revealing the encoded name and its salt.
pub fn build_claim_tx(
    account: AccountKey,
    name: EncodedName,
    name_salt: Salt,
    options: TxOptions,
) -> NameClaimTx {
    NameClaimTx {
        account,
        name,
        name_salt,
        options,
    }
}

/// Build an update transaction carrying the serialized pointer map.
pub fn build_update_tx(
    name_hash: NameHash,
    account: AccountKey,
    pointers: String,
    options: TxOptions,
) -> NameUpdateTx {
    NameUpdateTx {
        name_hash,
        account,
        pointers,
        options,
    }
}

/// Build a transfer transaction handing the name to another account.
pub fn build_transfer_tx(
    name_hash: NameHash,
    account: AccountKey,
    recipient_account: AccountKey,
    options: TxOptions,
) -> NameTransferTx {
    NameTransferTx {
        name_hash,
        account,
        recipient_account,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aens_types::TxOverrides;

    #[test]
    fn builders_carry_merged_options() {
        let merged = TxOptions::default().merge(&TxOverrides::name_ttl(300));
        let tx = build_update_tx(
            NameHash::new("nm$hash"),
            AccountKey::new("ak$caller"),
            "{}".to_string(),
            merged,
        );
        assert_eq!(tx.options.name_ttl, 300);
        assert_eq!(tx.options.client_ttl, 1);
    }

    #[test]
    fn transfer_keeps_both_parties() {
        let tx = build_transfer_tx(
            NameHash::new("nm$hash"),
            AccountKey::new("ak$caller"),
            AccountKey::new("ak$recipient"),
            TxOptions::default(),
        );
        assert_eq!(tx.account.as_str(), "ak$caller");
        assert_eq!(tx.recipient_account.as_str(), "ak$recipient");
    }
}
