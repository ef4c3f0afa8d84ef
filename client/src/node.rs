//! The node capability surface the facade is generic over.

use aens_types::{AccountKey, NameHash};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::NamingError;
use crate::tx::NameTx;

/// Capabilities the naming facade needs from its embedding context:
/// resolving the caller's account, broadcasting built transactions, and
/// fetching name registrations.
///
/// Production code uses [`crate::NodeClient`]; tests use a deterministic
/// in-memory implementation.
#[async_trait]
pub trait NamingNode: Send + Sync {
    /// Resolve the caller's own account key.
    async fn address(&self) -> Result<AccountKey, NamingError>;

    /// Submit a built name transaction to the ledger.
    async fn broadcast(&self, tx: NameTx) -> Result<BroadcastResult, NamingError>;

    /// Fetch the registration record for a name.
    async fn get_name(&self, name: &str) -> Result<NameRecord, NamingError>;
}

/// Acknowledgment returned by the node for a broadcast transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BroadcastResult {
    pub tx_hash: String,
    pub accepted: bool,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A name registration as the node reports it.
///
/// `pointers` is still the transport string here; the facade parses it
/// into a map when building a query snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    #[serde(rename = "nameHash")]
    pub name_hash: NameHash,
    #[serde(default)]
    pub owner: Option<AccountKey>,
    #[serde(default)]
    pub pointers: Option<String>,
    #[serde(rename = "nameTtl", default)]
    pub name_ttl: u64,
    #[serde(rename = "clientTtl", default)]
    pub client_ttl: u64,
    #[serde(rename = "expiresAt", default)]
    pub expires_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_with_missing_optional_fields() {
        let record: NameRecord =
            serde_json::from_str(r#"{"name":"example.test","nameHash":"nm$hash"}"#).unwrap();
        assert_eq!(record.name, "example.test");
        assert!(record.owner.is_none());
        assert!(record.pointers.is_none());
        assert_eq!(record.name_ttl, 0);
    }

    #[test]
    fn record_deserializes_full_payload() {
        let record: NameRecord = serde_json::from_str(
            r#"{
                "name": "example.test",
                "nameHash": "nm$hash",
                "owner": "ak$owner",
                "pointers": "{\"accountPubkey\":\"ak$abc\"}",
                "nameTtl": 50000,
                "clientTtl": 1,
                "expiresAt": 123456
            }"#,
        )
        .unwrap();
        assert_eq!(record.owner.unwrap().as_str(), "ak$owner");
        assert_eq!(record.expires_at, 123_456);
    }
}
