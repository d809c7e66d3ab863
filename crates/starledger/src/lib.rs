//! # Starledger
//!
//! A star registry: an append-only, hash-linked ledger whose entries are
//! authorized by time-boxed Ed25519 ownership proofs.
//!
//! ## Overview
//!
//! - **Block**: Immutable once sealed. Never edited. Changes are new blocks.
//! - **Chain**: Dense heights from 0; each block links to its predecessor
//!   by content hash.
//! - **Ownership proof**: A write is authorized by signing a challenge
//!   message within a 300 second window.
//! - **Validation**: A full scan reports every tamper or linkage
//!   violation instead of failing on the first one.
//!
//! ## Usage
//!
//! ```rust
//! use starledger::{Keypair, RegistryConfig, StarRecord, StarRegistry};
//!
//! let registry = StarRegistry::new(RegistryConfig::default());
//! let keypair = Keypair::generate();
//! let address = keypair.address();
//!
//! // Request a challenge and prove ownership by signing it.
//! let message = registry.request_ownership_challenge(&address).unwrap();
//! let signature = keypair.sign(message.as_bytes());
//!
//! let star = StarRecord {
//!     ra: "18h 36m 56.3s".to_string(),
//!     dec: "38° 47' 1.3\"".to_string(),
//!     story: "Vega".to_string(),
//! };
//! let block = registry
//!     .submit_star(&address, &message, &signature, star)
//!     .unwrap();
//!
//! assert_eq!(block.height, 1);
//! assert!(registry.validate_chain().unwrap().is_empty());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `starledger::core` - Core primitives (Block, BlockHash, payloads)
//! - `starledger::chain` - The ledger engine and validator
//! - `starledger::proof` - The ownership proof protocol

pub mod error;
pub mod registry;

// Re-export component crates
pub use starledger_chain as chain;
pub use starledger_core as core;
pub use starledger_proof as proof;

// Re-export main types for convenience
pub use error::{RegistryError, Result};
pub use registry::{RegistryConfig, StarRegistry};

// Re-export commonly used component types
pub use starledger_chain::{Chain, ChainConfig, ChainViolation, ViolationKind};
pub use starledger_core::{
    Block, BlockData, BlockHash, Ed25519PublicKey, Ed25519Signature, Keypair, StarClaim,
    StarRecord, WalletAddress,
};
pub use starledger_proof::{Challenge, ProofError, CHALLENGE_TAG, DEFAULT_VALIDITY_WINDOW};
