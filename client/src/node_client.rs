//! HTTP client for a ledger node's JSON-RPC endpoint.

use std::time::Duration;

use aens_types::AccountKey;
use async_trait::async_trait;

use crate::error::NamingError;
use crate::node::{BroadcastResult, NameRecord, NamingNode};
use crate::tx::NameTx;

/// JSON-RPC client for a ledger node.
///
/// Wraps `reqwest::Client` with the node's base URL and the caller's
/// account key, and provides typed methods for the two actions the
/// naming facade needs: broadcasting name transactions and fetching
/// registrations.
#[derive(Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    node_url: String,
    account: AccountKey,
}

impl NodeClient {
    /// Create a client targeting the given base URL (e.g. `http://127.0.0.1:3013`).
    pub fn new(node_url: impl Into<String>, account: AccountKey) -> Result<Self, NamingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NamingError::Node(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            node_url: node_url.into(),
            account,
        })
    }

    /// The configured node URL.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, NamingError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| NamingError::Node("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        let response = self
            .http
            .post(&self.node_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NamingError::Node(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(NamingError::Node(format!(
                "node returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| NamingError::Node(format!("invalid JSON response: {e}")))?;

        if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
            return Err(NamingError::Node(format!("node error: {err}")));
        }

        Ok(json.get("result").cloned().unwrap_or(json))
    }
}

#[async_trait]
impl NamingNode for NodeClient {
    async fn address(&self) -> Result<AccountKey, NamingError> {
        if !self.account.is_valid() {
            return Err(NamingError::Key(format!(
                "account key must start with {}: {}",
                AccountKey::PREFIX,
                self.account
            )));
        }
        Ok(self.account.clone())
    }

    async fn broadcast(&self, tx: NameTx) -> Result<BroadcastResult, NamingError> {
        tracing::debug!(kind = tx.kind(), "broadcasting name transaction");
        let tx_json = serde_json::to_value(&tx)
            .map_err(|e| NamingError::Node(format!("failed to serialize transaction: {e}")))?;
        let result = self
            .rpc_call("name_broadcast", serde_json::json!({ "transaction": tx_json }))
            .await?;

        serde_json::from_value(result)
            .map_err(|e| NamingError::Node(format!("invalid broadcast response: {e}")))
    }

    async fn get_name(&self, name: &str) -> Result<NameRecord, NamingError> {
        tracing::debug!(name, "fetching name registration");
        let result = self
            .rpc_call("get_name", serde_json::json!({ "name": name }))
            .await?;

        serde_json::from_value(result)
            .map_err(|e| NamingError::Node(format!("invalid name record: {e}")))
    }
}
