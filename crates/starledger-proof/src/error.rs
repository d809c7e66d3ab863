//! Error types for the ownership proof protocol.

use starledger_core::CoreError;
use thiserror::Error;

/// Errors that can occur while issuing or verifying ownership proofs.
#[derive(Debug, Error)]
pub enum ProofError {
    /// A challenge was requested for an empty wallet address.
    #[error("wallet address must not be empty")]
    EmptyAddress,

    /// The challenge message could not be parsed back into its parts.
    #[error("malformed challenge message: {0}")]
    MalformedMessage(String),

    /// The challenge is older than the validity window.
    #[error("proof expired: issued {age_secs}s ago, window is {window_secs}s")]
    Expired { age_secs: u64, window_secs: u64 },

    /// The signature does not verify against the claimed owner.
    #[error("signature does not match claimed owner")]
    SignatureMismatch,

    /// Failure of the signature primitive itself (e.g. an address that
    /// is not a public key). Propagated unchanged.
    #[error(transparent)]
    Crypto(#[from] CoreError),
}

/// Result type for proof operations.
pub type Result<T> = std::result::Result<T, ProofError>;
