//! The naming facade: preclaim/claim handshake, updates, transfers, queries.
//!
//! Registering a name is a two-phase protocol that prevents front-running:
//! first broadcast a one-way commitment over `(name, salt)`, then, once the
//! preclaim is on chain, reveal both inputs in a claim transaction. The
//! facade orchestrates that handshake plus the remaining name operations,
//! delegating everything stateful to a [`NamingNode`] implementer. Its only
//! own state is the immutable per-call TTL defaults.

use std::collections::HashMap;

use aens_crypto::{commitment_hash, encode_base58check, random_salt};
use aens_types::{
    classify, AccountKey, Commitment, EncodedName, NameHash, PointerKey, Salt, TxOptions,
    TxOverrides,
};

use crate::error::NamingError;
use crate::node::{BroadcastResult, NameRecord, NamingNode};
use crate::transaction_builder::{
    build_claim_tx, build_preclaim_tx, build_transfer_tx, build_update_tx,
};
use crate::tx::NameTx;

/// Client facade over a ledger's naming system.
///
/// Generic over the node capability so tests can substitute a
/// deterministic in-memory node. Holds no state beyond the TTL defaults;
/// concurrent calls are independent.
#[derive(Debug)]
pub struct Naming<N: NamingNode> {
    node: N,
    defaults: TxOptions,
}

impl<N: NamingNode> Naming<N> {
    /// Create a facade with the standard TTL defaults.
    pub fn new(node: N) -> Self {
        Self::with_defaults(node, TxOptions::default())
    }

    /// Create a facade with explicit TTL defaults.
    pub fn with_defaults(node: N, defaults: TxOptions) -> Self {
        Self { node, defaults }
    }

    /// The TTL defaults merged into every call.
    pub fn defaults(&self) -> TxOptions {
        self.defaults
    }

    /// The underlying node.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Reserve intent to claim `name` without revealing it.
    ///
    /// Generates a fresh salt, broadcasts the commitment, and returns a
    /// receipt binding that exact salt. Finish the handshake by calling
    /// [`PreclaimReceipt::claim`] once the preclaim is on chain.
    pub async fn preclaim(
        &self,
        name: &str,
        overrides: &TxOverrides,
    ) -> Result<PreclaimReceipt<'_, N>, NamingError> {
        let opt = self.defaults.merge(overrides);
        let salt = random_salt();
        let commitment = commitment_hash(name, salt);

        let account = self.node.address().await?;
        let tx = build_preclaim_tx(account, commitment.clone(), opt);
        self.node.broadcast(NameTx::NamePreclaim(tx)).await?;

        Ok(PreclaimReceipt {
            name: name.to_string(),
            salt,
            commitment,
            naming: self,
        })
    }

    /// Claim a previously preclaimed name.
    ///
    /// `salt` must be the exact value from the matching preclaim; the
    /// ledger rejects the transaction otherwise (no local re-check).
    /// Re-queries the registration after broadcast so the caller gets the
    /// ledger's view rather than the broadcast acknowledgment.
    pub async fn claim(
        &self,
        name: &str,
        salt: Salt,
        overrides: &TxOverrides,
    ) -> Result<NameEntry<'_, N>, NamingError> {
        let opt = self.defaults.merge(overrides);
        let account = self.node.address().await?;
        let tx = build_claim_tx(account, encode_name(name), salt, opt);
        self.node.broadcast(NameTx::NameClaim(tx)).await?;

        self.query(name).await
    }

    /// Point a registration at a new target.
    ///
    /// The target is classified by prefix before anything else; a
    /// malformed or unknown target fails the call before a transaction is
    /// built. Returns the broadcast acknowledgment without re-querying.
    pub async fn update(
        &self,
        name_hash: &NameHash,
        target: &str,
        overrides: &TxOverrides,
    ) -> Result<BroadcastResult, NamingError> {
        let opt = self.defaults.merge(overrides);
        let key = classify(target)?;
        let pointers = serialize_pointers(key, target)?;

        let account = self.node.address().await?;
        let tx = build_update_tx(name_hash.clone(), account, pointers, opt);
        self.node.broadcast(NameTx::NameUpdate(tx)).await
    }

    /// Hand a registration over to another account.
    ///
    /// Returns the broadcast acknowledgment without re-querying.
    pub async fn transfer(
        &self,
        name_hash: &NameHash,
        recipient: &AccountKey,
        overrides: &TxOverrides,
    ) -> Result<BroadcastResult, NamingError> {
        let opt = self.defaults.merge(overrides);
        let account = self.node.address().await?;
        let tx = build_transfer_tx(name_hash.clone(), account, recipient.clone(), opt);
        self.node.broadcast(NameTx::NameTransfer(tx)).await
    }

    /// Fetch a registration and return an immutable snapshot of it.
    ///
    /// The stored pointer string is parsed into a map; absent or empty
    /// pointers yield an empty map. A malformed stored value fails the
    /// call.
    pub async fn query(&self, name: &str) -> Result<NameEntry<'_, N>, NamingError> {
        let record = self.node.get_name(name).await?;
        let NameRecord {
            name,
            name_hash,
            owner,
            pointers,
            name_ttl,
            client_ttl,
            expires_at,
        } = record;

        Ok(NameEntry {
            name,
            name_hash,
            owner,
            pointers: parse_pointers(pointers.as_deref())?,
            name_ttl,
            client_ttl,
            expires_at,
            naming: self,
        })
    }
}

/// Receipt for a broadcast preclaim.
///
/// Immutable: the salt and commitment are captured at preclaim time and
/// [`claim`](Self::claim) always uses that exact salt. No local expiry;
/// the ledger enforces the preclaim-to-claim window.
#[derive(Debug)]
pub struct PreclaimReceipt<'a, N: NamingNode> {
    name: String,
    salt: Salt,
    commitment: Commitment,
    naming: &'a Naming<N>,
}

impl<'a, N: NamingNode> PreclaimReceipt<'a, N> {
    /// The name this receipt reserves.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The secret salt committed to. Needed again only if claiming
    /// through [`Naming::claim`] directly.
    pub fn salt(&self) -> Salt {
        self.salt
    }

    /// The commitment hash that was broadcast.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Finish the handshake: claim the name with the preclaim's salt.
    pub async fn claim(&self, overrides: &TxOverrides) -> Result<NameEntry<'a, N>, NamingError> {
        self.naming.claim(&self.name, self.salt, overrides).await
    }
}

/// Immutable snapshot of a name registration.
///
/// Combines the remote record with the parsed pointer map. The
/// [`update`](Self::update) and [`transfer`](Self::transfer) methods
/// mutate the registration through the owning facade and return a fresh
/// snapshot; this one is never modified in place.
#[derive(Debug)]
pub struct NameEntry<'a, N: NamingNode> {
    name: String,
    name_hash: NameHash,
    owner: Option<AccountKey>,
    pointers: HashMap<PointerKey, String>,
    name_ttl: u64,
    client_ttl: u64,
    expires_at: u64,
    naming: &'a Naming<N>,
}

impl<'a, N: NamingNode> NameEntry<'a, N> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_hash(&self) -> &NameHash {
        &self.name_hash
    }

    pub fn owner(&self) -> Option<&AccountKey> {
        self.owner.as_ref()
    }

    pub fn pointers(&self) -> &HashMap<PointerKey, String> {
        &self.pointers
    }

    pub fn name_ttl(&self) -> u64 {
        self.name_ttl
    }

    pub fn client_ttl(&self) -> u64 {
        self.client_ttl
    }

    pub fn expires_at(&self) -> u64 {
        self.expires_at
    }

    /// Update this registration's pointer target, then return a fresh
    /// snapshot.
    pub async fn update(
        &self,
        target: &str,
        overrides: &TxOverrides,
    ) -> Result<NameEntry<'a, N>, NamingError> {
        self.naming.update(&self.name_hash, target, overrides).await?;
        self.naming.query(&self.name).await
    }

    /// Transfer this registration to another account, then return a
    /// fresh snapshot.
    pub async fn transfer(
        &self,
        recipient: &AccountKey,
        overrides: &TxOverrides,
    ) -> Result<NameEntry<'a, N>, NamingError> {
        self.naming
            .transfer(&self.name_hash, recipient, overrides)
            .await?;
        self.naming.query(&self.name).await
    }
}

/// Encode a name into its on-chain wire form: `nm$` + base58check(utf-8).
pub fn encode_name(name: &str) -> EncodedName {
    EncodedName::new(format!(
        "{}{}",
        EncodedName::PREFIX,
        encode_base58check(name.as_bytes())
    ))
}

/// Serialize a single-entry pointer map to its transport string.
fn serialize_pointers(key: PointerKey, target: &str) -> Result<String, NamingError> {
    let mut map = HashMap::with_capacity(1);
    map.insert(key, target);
    serde_json::to_string(&map).map_err(|e| NamingError::PointerRecord(e.to_string()))
}

/// Parse a stored pointer transport string. Absent or empty means no
/// pointers, never an error.
fn parse_pointers(raw: Option<&str>) -> Result<HashMap<PointerKey, String>, NamingError> {
    match raw {
        None | Some("") => Ok(HashMap::new()),
        Some(s) => {
            serde_json::from_str(s).map_err(|e| NamingError::PointerRecord(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aens_crypto::decode_base58check;

    #[test]
    fn encode_name_is_prefixed_base58check() {
        let encoded = encode_name("example.test");
        let payload = encoded
            .as_str()
            .strip_prefix(EncodedName::PREFIX)
            .expect("missing nm$ prefix");
        assert_eq!(decode_base58check(payload).unwrap(), b"example.test");
    }

    #[test]
    fn serialize_pointers_single_entry() {
        let json = serialize_pointers(PointerKey::AccountPubkey, "ak$abc123").unwrap();
        assert_eq!(json, r#"{"accountPubkey":"ak$abc123"}"#);
    }

    #[test]
    fn parse_pointers_absent_is_empty() {
        assert!(parse_pointers(None).unwrap().is_empty());
        assert!(parse_pointers(Some("")).unwrap().is_empty());
    }

    #[test]
    fn parse_pointers_roundtrips_serialized_map() {
        let json = serialize_pointers(PointerKey::OraclePubkey, "ok$oracle").unwrap();
        let map = parse_pointers(Some(&json)).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&PointerKey::OraclePubkey], "ok$oracle");
    }

    #[test]
    fn parse_pointers_rejects_malformed_json() {
        let err = parse_pointers(Some("{not json")).unwrap_err();
        assert!(matches!(err, NamingError::PointerRecord(_)));
    }

    #[test]
    fn parse_pointers_rejects_unknown_keys() {
        let err = parse_pointers(Some(r#"{"somethingElse":"xx$1"}"#)).unwrap_err();
        assert!(matches!(err, NamingError::PointerRecord(_)));
    }
}
