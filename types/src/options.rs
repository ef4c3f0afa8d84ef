//! Per-call TTL configuration with explicit merge semantics.

use serde::{Deserialize, Serialize};

/// TTL options attached to every name transaction.
///
/// The defaults mirror the ledger's governance values: `name_ttl = 50000`
/// is the maximum allowed claim expiration in blocks, `client_ttl = 1`
/// tells resolvers to re-fetch on every lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOptions {
    /// Blocks a resolver may cache a looked-up pointer.
    #[serde(rename = "clientTtl")]
    pub client_ttl: u64,
    /// Blocks until the registration expires.
    #[serde(rename = "nameTtl")]
    pub name_ttl: u64,
}

impl TxOptions {
    pub const DEFAULT_CLIENT_TTL: u64 = 1;
    pub const DEFAULT_NAME_TTL: u64 = 50_000;

    /// Merge caller overrides over these options, right-biased per field.
    ///
    /// Produces a new value; neither input is mutated.
    pub fn merge(&self, overrides: &TxOverrides) -> TxOptions {
        TxOptions {
            client_ttl: overrides.client_ttl.unwrap_or(self.client_ttl),
            name_ttl: overrides.name_ttl.unwrap_or(self.name_ttl),
        }
    }
}

impl Default for TxOptions {
    fn default() -> Self {
        Self {
            client_ttl: Self::DEFAULT_CLIENT_TTL,
            name_ttl: Self::DEFAULT_NAME_TTL,
        }
    }
}

/// Caller-supplied per-call overrides. Unset fields keep the defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxOverrides {
    pub client_ttl: Option<u64>,
    pub name_ttl: Option<u64>,
}

impl TxOverrides {
    /// Override only the name TTL.
    pub fn name_ttl(ttl: u64) -> Self {
        Self {
            name_ttl: Some(ttl),
            ..Self::default()
        }
    }

    /// Override only the client TTL.
    pub fn client_ttl(ttl: u64) -> Self {
        Self {
            client_ttl: Some(ttl),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_governance_values() {
        let opts = TxOptions::default();
        assert_eq!(opts.client_ttl, 1);
        assert_eq!(opts.name_ttl, 50_000);
    }

    #[test]
    fn merge_is_right_biased() {
        let merged = TxOptions::default().merge(&TxOverrides::name_ttl(10));
        assert_eq!(merged.name_ttl, 10);
        assert_eq!(merged.client_ttl, 1);
    }

    #[test]
    fn merge_with_empty_overrides_is_identity() {
        let opts = TxOptions::default();
        assert_eq!(opts.merge(&TxOverrides::default()), opts);
    }

    #[test]
    fn merge_does_not_mutate_defaults() {
        let opts = TxOptions::default();
        let _ = opts.merge(&TxOverrides {
            client_ttl: Some(99),
            name_ttl: Some(99),
        });
        assert_eq!(opts, TxOptions::default());
    }

    #[test]
    fn serde_uses_wire_field_names() {
        let json = serde_json::to_value(TxOptions::default()).unwrap();
        assert_eq!(json["clientTtl"], 1);
        assert_eq!(json["nameTtl"], 50_000);
    }
}
