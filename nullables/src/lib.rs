//! Nullable infrastructure for deterministic testing.
//!
//! The naming facade's one external dependency is the node it talks to.
//! [`NullNode`] implements that capability in memory:
//! - Records every broadcast transaction for assertions
//! - Serves name records from a programmable in-memory table
//! - Applies claim/update/transfer broadcasts to that table so
//!   re-queries observe them
//! - Injects failures on demand
//!
//! Usage: swap the real `NodeClient` for a `NullNode` in tests.

pub mod node;

pub use node::NullNode;
