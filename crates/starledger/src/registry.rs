//! The registry: unified API over the chain and the proof protocol.
//!
//! Every write flows proof verification first, then the append engine;
//! a rejected proof leaves the chain exactly as it was.

use std::time::Duration;

use tracing::info;

use starledger_chain::{Chain, ChainConfig, ChainViolation};
use starledger_core::{Block, BlockData, BlockHash, Ed25519Signature, StarClaim, StarRecord, WalletAddress};
use starledger_proof::{issue_challenge, verify_proof, DEFAULT_VALIDITY_WINDOW};

use crate::error::Result;

/// Configuration for the registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// How long an issued challenge stays valid.
    pub proof_validity_window: Duration,

    /// Chain configuration (genesis marker).
    pub chain: ChainConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            proof_validity_window: DEFAULT_VALIDITY_WINDOW,
            chain: ChainConfig::default(),
        }
    }
}

/// The star registry.
///
/// Provides a unified API for:
/// - Requesting ownership challenges
/// - Submitting signed star claims
/// - Querying blocks and stars
/// - Validating chain integrity
pub struct StarRegistry {
    config: RegistryConfig,
    chain: Chain,
}

impl StarRegistry {
    /// Create a registry; the underlying chain bootstraps its genesis
    /// block.
    pub fn new(config: RegistryConfig) -> Self {
        let chain = Chain::new(config.chain.clone());
        Self { config, chain }
    }

    /// Get the underlying chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Path
    // ─────────────────────────────────────────────────────────────────────────

    /// Issue an ownership challenge message for `address`.
    ///
    /// The owner signs the returned message and submits it back through
    /// [`StarRegistry::submit_star`] within the validity window.
    pub fn request_ownership_challenge(&self, address: &WalletAddress) -> Result<String> {
        Ok(issue_challenge(address, now_secs())?)
    }

    /// Submit a signed star claim.
    ///
    /// Verifies the proof (expiry, then signature), seals an owner-tagged
    /// block, and returns it. Any rejection leaves the chain untouched.
    pub fn submit_star(
        &self,
        address: &WalletAddress,
        message: &str,
        signature: &Ed25519Signature,
        star: StarRecord,
    ) -> Result<Block> {
        verify_proof(
            message,
            address,
            signature,
            now_secs(),
            self.config.proof_validity_window,
        )?;

        let claim = StarClaim {
            owner: address.clone(),
            star,
        };
        let block = self.chain.append(&BlockData::Star(claim))?;
        info!(owner = %address, height = block.height, "star claim accepted");
        Ok(block)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Path
    // ─────────────────────────────────────────────────────────────────────────

    /// Current chain height (-1 when the chain is empty).
    pub fn chain_height(&self) -> i64 {
        self.chain.height()
    }

    /// Look up a block by content hash.
    pub fn block_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        self.chain.block_by_hash(hash)
    }

    /// Look up a block by height.
    pub fn block_by_height(&self, height: u64) -> Option<Block> {
        self.chain.block_by_height(height)
    }

    /// All stars claimed by `address`, in chain order.
    ///
    /// Always a (possibly empty) list.
    pub fn stars_by_wallet(&self, address: &WalletAddress) -> Result<Vec<StarRecord>> {
        let claims = self.chain.claims_by_owner(address)?;
        Ok(claims.into_iter().map(|claim| claim.star).collect())
    }

    /// Scan the chain and report every integrity violation.
    pub fn validate_chain(&self) -> Result<Vec<ChainViolation>> {
        Ok(self.chain.validate()?)
    }
}

impl Default for StarRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

/// Get current time in whole Unix seconds.
fn now_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use starledger_core::Keypair;

    fn sample_star(story: &str) -> StarRecord {
        StarRecord {
            ra: "14h 15m 39.7s".to_string(),
            dec: "19° 10' 56.7\"".to_string(),
            story: story.to_string(),
        }
    }

    #[test]
    fn test_challenge_round_trip_submission() {
        let registry = StarRegistry::default();
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let address = keypair.address();

        let message = registry.request_ownership_challenge(&address).unwrap();
        let signature = keypair.sign(message.as_bytes());

        let block = registry
            .submit_star(&address, &message, &signature, sample_star("Arcturus"))
            .unwrap();

        assert_eq!(block.height, 1);
        assert_eq!(registry.chain_height(), 1);

        let stars = registry.stars_by_wallet(&address).unwrap();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].story, "Arcturus");
    }

    #[test]
    fn test_rejected_submission_leaves_chain_untouched() {
        let registry = StarRegistry::default();
        let owner = Keypair::from_seed(&[0x01; 32]);
        let imposter = Keypair::from_seed(&[0x02; 32]);
        let address = owner.address();

        let message = registry.request_ownership_challenge(&address).unwrap();
        let forged = imposter.sign(message.as_bytes());

        let result = registry.submit_star(&address, &message, &forged, sample_star("stolen"));
        assert!(result.is_err());
        assert_eq!(registry.chain_height(), 0);
        assert!(registry.stars_by_wallet(&address).unwrap().is_empty());
    }

    #[test]
    fn test_shortened_window_from_config() {
        let registry = StarRegistry::new(RegistryConfig {
            proof_validity_window: Duration::from_secs(0),
            ..RegistryConfig::default()
        });
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let address = keypair.address();

        // Issue a message one second in the past so a zero window rejects it.
        let message =
            starledger_proof::issue_challenge(&address, now_secs() - 1).unwrap();
        let signature = keypair.sign(message.as_bytes());

        let result = registry.submit_star(&address, &message, &signature, sample_star("late"));
        assert!(matches!(
            result,
            Err(crate::error::RegistryError::Proof(
                starledger_proof::ProofError::Expired { .. }
            ))
        ));
    }
}
