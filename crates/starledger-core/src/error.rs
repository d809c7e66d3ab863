//! Error types for the star ledger core.

use thiserror::Error;

/// Core errors that can occur during block and payload operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("payload encoding failed: {0}")]
    Encoding(String),

    #[error("payload decoding failed: {0}")]
    Decoding(String),
}
