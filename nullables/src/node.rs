//! Nullable node — an in-memory ledger for the naming facade.

use std::collections::HashMap;
use std::sync::Mutex;

use aens_client::{BroadcastResult, NameRecord, NameTx, NamingError, NamingNode};
use aens_crypto::decode_base58check;
use aens_types::{AccountKey, EncodedName, NameHash};
use async_trait::async_trait;

/// A test node that keeps name registrations in memory.
///
/// Broadcasts are recorded and applied to the in-memory table, so a
/// facade that claims, updates, or transfers a name and then re-queries
/// sees the effect. No networking, no validation beyond what the facade
/// itself needs to observe failures.
#[derive(Debug)]
pub struct NullNode {
    account: AccountKey,
    /// Registered names, keyed by human-readable name.
    names: Mutex<HashMap<String, NameRecord>>,
    /// Every transaction "broadcast" through this node.
    broadcasts: Mutex<Vec<NameTx>>,
    /// One-shot failure for the next broadcast.
    broadcast_failure: Mutex<Option<String>>,
    /// One-shot failure for the next address resolution.
    address_failure: Mutex<Option<String>>,
}

impl NullNode {
    pub fn new() -> Self {
        Self::with_account(AccountKey::new("ak$null_caller"))
    }

    pub fn with_account(account: AccountKey) -> Self {
        Self {
            account,
            names: Mutex::new(HashMap::new()),
            broadcasts: Mutex::new(Vec::new()),
            broadcast_failure: Mutex::new(None),
            address_failure: Mutex::new(None),
        }
    }

    /// Pre-register a name record (as if claimed earlier).
    pub fn put_name(&self, record: NameRecord) {
        self.names
            .lock()
            .unwrap()
            .insert(record.name.clone(), record);
    }

    /// All transactions broadcast so far (for assertions).
    pub fn broadcasts(&self) -> Vec<NameTx> {
        self.broadcasts.lock().unwrap().clone()
    }

    /// Make the next broadcast fail with the given reason.
    pub fn fail_next_broadcast(&self, reason: impl Into<String>) {
        *self.broadcast_failure.lock().unwrap() = Some(reason.into());
    }

    /// Make the next address resolution fail with the given reason.
    pub fn fail_next_address(&self, reason: impl Into<String>) {
        *self.address_failure.lock().unwrap() = Some(reason.into());
    }

    /// Clear all state.
    pub fn reset(&self) {
        self.names.lock().unwrap().clear();
        self.broadcasts.lock().unwrap().clear();
        *self.broadcast_failure.lock().unwrap() = None;
        *self.address_failure.lock().unwrap() = None;
    }

    /// Apply a broadcast transaction to the in-memory table.
    fn apply(&self, tx: &NameTx) -> Result<(), NamingError> {
        let mut names = self.names.lock().unwrap();
        match tx {
            NameTx::NamePreclaim(_) => {
                // Commitments are opaque; nothing observable until the claim.
            }
            NameTx::NameClaim(claim) => {
                let name = decode_wire_name(&claim.name)?;
                names.insert(
                    name.clone(),
                    NameRecord {
                        name_hash: NameHash::new(claim.name.as_str()),
                        name,
                        owner: Some(claim.account.clone()),
                        pointers: None,
                        name_ttl: claim.options.name_ttl,
                        client_ttl: claim.options.client_ttl,
                        expires_at: claim.options.name_ttl,
                    },
                );
            }
            NameTx::NameUpdate(update) => {
                let record = names
                    .values_mut()
                    .find(|r| r.name_hash == update.name_hash)
                    .ok_or_else(|| {
                        NamingError::Node(format!("name not found: {}", update.name_hash))
                    })?;
                record.pointers = Some(update.pointers.clone());
                record.name_ttl = update.options.name_ttl;
                record.client_ttl = update.options.client_ttl;
            }
            NameTx::NameTransfer(transfer) => {
                let record = names
                    .values_mut()
                    .find(|r| r.name_hash == transfer.name_hash)
                    .ok_or_else(|| {
                        NamingError::Node(format!("name not found: {}", transfer.name_hash))
                    })?;
                record.owner = Some(transfer.recipient_account.clone());
            }
        }
        Ok(())
    }
}

impl Default for NullNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NamingNode for NullNode {
    async fn address(&self) -> Result<AccountKey, NamingError> {
        if let Some(reason) = self.address_failure.lock().unwrap().take() {
            return Err(NamingError::Key(reason));
        }
        Ok(self.account.clone())
    }

    async fn broadcast(&self, tx: NameTx) -> Result<BroadcastResult, NamingError> {
        if let Some(reason) = self.broadcast_failure.lock().unwrap().take() {
            return Err(NamingError::Node(reason));
        }
        self.apply(&tx)?;

        let mut broadcasts = self.broadcasts.lock().unwrap();
        broadcasts.push(tx);
        Ok(BroadcastResult {
            tx_hash: format!("th${}", broadcasts.len()),
            accepted: true,
            detail: None,
        })
    }

    async fn get_name(&self, name: &str) -> Result<NameRecord, NamingError> {
        self.names
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| NamingError::Node(format!("name not found: {name}")))
    }
}

/// Recover the human-readable name from its wire form.
fn decode_wire_name(encoded: &EncodedName) -> Result<String, NamingError> {
    let payload = encoded
        .as_str()
        .strip_prefix(EncodedName::PREFIX)
        .ok_or_else(|| NamingError::Node(format!("malformed encoded name: {encoded}")))?;
    let bytes = decode_base58check(payload)
        .ok_or_else(|| NamingError::Node(format!("malformed encoded name: {encoded}")))?;
    String::from_utf8(bytes)
        .map_err(|e| NamingError::Node(format!("encoded name is not utf-8: {e}")))
}
