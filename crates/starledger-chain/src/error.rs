//! Error types for the chain module.

use starledger_core::CoreError;
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Sealing or payload codec failure from the core primitives.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A stored payload could not be decoded during a query scan.
    #[error("payload at height {height} could not be decoded: {source}")]
    PayloadDecode {
        height: u64,
        #[source]
        source: CoreError,
    },
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
