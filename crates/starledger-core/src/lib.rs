//! # Starledger Core
//!
//! Pure primitives for the star registry ledger: blocks, payloads, and
//! canonical sealing.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable, hash-linked ledger entry
//! - [`BlockHash`] - Content-addressed identifier (Blake3 hash)
//! - [`BlockData`] - Decoded payload: genesis marker or owner-tagged star claim
//! - [`WalletAddress`] - The identity an owner claims blocks under
//!
//! ## Sealing
//!
//! A block's hash covers every other field via a deterministic,
//! domain-prefixed CBOR encoding. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod types;

pub use block::Block;
pub use canonical::{compute_block_hash, seal_bytes};
pub use crypto::{verify_ownership_signature, Ed25519PublicKey, Ed25519Signature, Keypair};
pub use error::CoreError;
pub use payload::{BlockData, StarClaim, StarRecord, GENESIS_MARKER};
pub use types::{BlockHash, WalletAddress};
