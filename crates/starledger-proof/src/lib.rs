//! # Starledger Proof
//!
//! The ownership proof protocol: a wallet owner requests a time-boxed
//! challenge message, signs it, and returns message + signature to
//! authorize a ledger write.
//!
//! ## Protocol
//!
//! 1. [`issue_challenge`] binds the address, the issue time (whole
//!    seconds), and a protocol tag into one message string.
//! 2. The owner signs the message with the key behind their address.
//! 3. [`verify_proof`] reconstructs the [`Challenge`] from the message,
//!    rejects it once older than the validity window (300 s by default),
//!    and only then checks the signature.
//!
//! Challenges are stateless: nothing is stored between issuance and
//! verification.

pub mod challenge;
pub mod error;
pub mod verify;

pub use challenge::{issue_challenge, Challenge, CHALLENGE_TAG, DEFAULT_VALIDITY_WINDOW};
pub use error::{ProofError, Result};
pub use verify::verify_proof;
