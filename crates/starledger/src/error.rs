//! Error types for the registry.

use starledger_chain::ChainError;
use starledger_proof::ProofError;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Ledger error (sealing, payload codec, corrupted store).
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// Ownership proof error (bad request, expiry, signature).
    #[error("proof error: {0}")]
    Proof(#[from] ProofError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
