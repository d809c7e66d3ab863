//! Proof verification: expiry window, then signature.
//!
//! The expiry check runs before the signature check: an expired proof is
//! rejected without touching the signature primitive. The ordering is
//! fixed; both checks are independent.

use std::time::Duration;

use starledger_core::{verify_ownership_signature, Ed25519Signature, WalletAddress};

use crate::challenge::Challenge;
use crate::error::{ProofError, Result};

/// Verify an ownership proof for `address` over a challenge message.
///
/// Steps, in order:
/// 1. Reconstruct the challenge from `message`.
/// 2. Reject with [`ProofError::Expired`] when its age exceeds `window`.
/// 3. Verify `signature` over the message bytes against `address`;
///    a non-verifying signature is [`ProofError::SignatureMismatch`],
///    and primitive failures (undecodable address) propagate unchanged.
pub fn verify_proof(
    message: &str,
    address: &WalletAddress,
    signature: &Ed25519Signature,
    now_secs: u64,
    window: Duration,
) -> Result<()> {
    let challenge = Challenge::parse(message)?;

    let age_secs = challenge.age_secs(now_secs);
    if age_secs > window.as_secs() {
        return Err(ProofError::Expired {
            age_secs,
            window_secs: window.as_secs(),
        });
    }

    if !verify_ownership_signature(message.as_bytes(), address, signature)? {
        return Err(ProofError::SignatureMismatch);
    }

    Ok(())
}
