//! # Starledger Chain
//!
//! The ledger engine for the star registry: an in-memory, append-only
//! sequence of hash-linked blocks with a full-scan integrity validator
//! and read-side queries.
//!
//! ## Key Types
//!
//! - [`Chain`] - The ledger: genesis bootstrap, append, queries, validation
//! - [`ChainConfig`] - Constructor-injected configuration
//! - [`ChainViolation`] / [`ViolationKind`] - Validator findings
//!
//! ## Concurrency
//!
//! One logical writer: the read-tail/seal/push sequence runs under an
//! exclusive lock, and the validator scans under the read lock for a
//! stable snapshot. Queries may run concurrently with each other.

pub mod chain;
pub mod error;
pub mod store;
pub mod validate;

pub use chain::{Chain, ChainConfig};
pub use error::{ChainError, Result};
pub use store::BlockStore;
pub use validate::{validate_blocks, ChainViolation, ViolationKind};
