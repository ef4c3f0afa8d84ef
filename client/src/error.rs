use aens_types::PointerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamingError {
    /// Pointer target failed classification (format or unknown class).
    #[error(transparent)]
    Pointer(#[from] PointerError),

    #[error("key error: {0}")]
    Key(String),

    #[error("node RPC error: {0}")]
    Node(String),

    #[error("malformed pointer record: {0}")]
    PointerRecord(String),
}
