//! Client facade for the AENS naming system.
//!
//! Provides everything an application needs to work with names:
//! - The preclaim/claim commitment handshake (front-running protection)
//! - Pointer updates and ownership transfers
//! - Registration queries with parsed pointer maps
//! - Typed name transactions and builders
//! - A JSON-RPC [`NodeClient`] for talking to a ledger node
//!
//! The facade is generic over the [`NamingNode`] capability trait, so the
//! node can be swapped for a deterministic test double.

pub mod error;
pub mod naming;
pub mod node;
pub mod node_client;
pub mod transaction_builder;
pub mod tx;

pub use error::NamingError;
pub use naming::{encode_name, NameEntry, Naming, PreclaimReceipt};
pub use node::{BroadcastResult, NameRecord, NamingNode};
pub use node_client::NodeClient;
pub use tx::{NameClaimTx, NamePreclaimTx, NameTransferTx, NameTx, NameUpdateTx};
