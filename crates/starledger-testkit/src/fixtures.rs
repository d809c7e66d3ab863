//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::time::{SystemTime, UNIX_EPOCH};

use starledger::{Block, Ed25519Signature, Keypair, StarRecord, StarRegistry, WalletAddress};
use starledger_proof::issue_challenge;

/// A test fixture with a keypair and a freshly bootstrapped registry.
pub struct TestFixture {
    pub keypair: Keypair,
    pub registry: StarRegistry,
}

impl TestFixture {
    /// Create a new fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
            registry: StarRegistry::default(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
            registry: StarRegistry::default(),
        }
    }

    /// The fixture keypair's wallet address.
    pub fn address(&self) -> WalletAddress {
        self.keypair.address()
    }

    /// Run the full request/sign/submit round for one star claim.
    pub fn claim_star(&self, star: StarRecord) -> Block {
        let address = self.address();
        let message = self
            .registry
            .request_ownership_challenge(&address)
            .expect("challenge for non-empty address");
        let signature = self.keypair.sign(message.as_bytes());
        self.registry
            .submit_star(&address, &message, &signature, star)
            .expect("fresh self-signed proof")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic keypairs for multi-owner tests.
pub fn multi_owner_keypairs(count: usize) -> Vec<Keypair> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            Keypair::from_seed(&seed)
        })
        .collect()
}

/// A star record with recognizable content.
pub fn sample_star(story: &str) -> StarRecord {
    StarRecord {
        ra: "16h 29m 1.0s".to_string(),
        dec: "-26° 29' 24.9\"".to_string(),
        story: story.to_string(),
    }
}

/// An already-expired challenge message plus a valid signature over it,
/// for exercising the expiry path without waiting out the window.
pub fn expired_proof(keypair: &Keypair) -> (String, Ed25519Signature) {
    let issued_at = now_secs().saturating_sub(301);
    let message = issue_challenge(&keypair.address(), issued_at).expect("non-empty address");
    let signature = keypair.sign(message.as_bytes());
    (message, signature)
}

/// Get current time in whole Unix seconds.
fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs()
}

/// Flip one payload bit of the block at `height`, bypassing the sealing
/// path. Panics if the height is out of range.
pub fn flip_payload_byte(blocks: &mut [Block], height: usize, byte_index: usize) {
    let block = &mut blocks[height];
    let mut payload = block.payload.to_vec();
    let index = byte_index % payload.len();
    payload[index] ^= 0x01;
    block.payload = payload.into();
}
