//! The chain: genesis bootstrap, append engine, and read-side queries.
//!
//! All mutation is serialized behind the write lock: the read-tail,
//! seal, push sequence runs under one exclusive acquisition, so linkage
//! fields always reflect the tail they were computed from. Readers take
//! the read lock and can never observe a partially sealed block.

use std::sync::RwLock;

use tracing::{debug, warn};

use starledger_core::{Block, BlockData, BlockHash, StarClaim, WalletAddress};

use crate::error::{ChainError, Result};
use crate::store::BlockStore;
use crate::validate::{validate_blocks, ChainViolation};

/// Configuration for a chain.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Marker text sealed into the genesis block.
    pub genesis_marker: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            genesis_marker: starledger_core::GENESIS_MARKER.to_string(),
        }
    }
}

/// An append-only, hash-linked ledger of sealed blocks.
pub struct Chain {
    inner: RwLock<BlockStore>,
}

impl Chain {
    /// Create a chain and bootstrap its genesis block.
    ///
    /// A bootstrap failure is logged and swallowed: the chain starts
    /// empty but usable, and the next append will claim height 0.
    pub fn new(config: ChainConfig) -> Self {
        let chain = Self {
            inner: RwLock::new(BlockStore::new()),
        };

        let genesis = BlockData::Genesis {
            marker: config.genesis_marker,
        };
        if let Err(err) = chain.append(&genesis) {
            warn!(%err, "genesis bootstrap failed; chain starts empty");
        }

        chain
    }

    /// Append a payload as a new sealed block and return it.
    ///
    /// Atomic: any failure before the push leaves the store untouched.
    pub fn append(&self, data: &BlockData) -> Result<Block> {
        let payload = data.to_bytes()?;
        let timestamp_ms = now_millis();

        let mut store = self.inner.write().unwrap();

        let height = store.len() as u64;
        let previous_hash = store.tip().map(|tip| tip.hash);
        let block = Block::seal(height, timestamp_ms, previous_hash, payload)?;

        store.push(block.clone());
        debug!(height, hash = %block.hash, "appended block");
        Ok(block)
    }

    /// Current chain height: length minus one, or -1 when empty.
    pub fn height(&self) -> i64 {
        self.inner.read().unwrap().len() as i64 - 1
    }

    /// Look up a block by its content hash.
    pub fn block_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        self.inner.read().unwrap().get_by_hash(hash).cloned()
    }

    /// Look up a block by its height.
    pub fn block_by_height(&self, height: u64) -> Option<Block> {
        self.inner.read().unwrap().get(height).cloned()
    }

    /// A snapshot of all blocks, in height order.
    pub fn blocks(&self) -> Vec<Block> {
        self.inner.read().unwrap().blocks().to_vec()
    }

    /// All star claims whose owner equals `owner`, in chain order.
    ///
    /// Always returns a (possibly empty) list; payloads without an owner
    /// (the genesis marker) are skipped. A payload that fails to decode is
    /// a corruption signal and propagates with its height.
    pub fn claims_by_owner(&self, owner: &WalletAddress) -> Result<Vec<StarClaim>> {
        let store = self.inner.read().unwrap();

        let mut claims = Vec::new();
        for block in store.blocks() {
            let data = block
                .decode_payload()
                .map_err(|source| ChainError::PayloadDecode {
                    height: block.height,
                    source,
                })?;
            if let BlockData::Star(claim) = data {
                if &claim.owner == owner {
                    claims.push(claim);
                }
            }
        }
        Ok(claims)
    }

    /// Scan the whole chain and report every integrity violation.
    ///
    /// The scan holds the read lock, so it sees a stable snapshot even
    /// while writers are waiting. Never mutates the store.
    pub fn validate(&self) -> Result<Vec<ChainViolation>> {
        let store = self.inner.read().unwrap();
        Ok(validate_blocks(store.blocks())?)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new(ChainConfig::default())
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use starledger_core::StarRecord;

    fn claim(owner: &str, story: &str) -> BlockData {
        BlockData::Star(StarClaim {
            owner: WalletAddress::new(owner),
            star: StarRecord {
                ra: "6h 45m 8.9s".to_string(),
                dec: "-16° 42' 58.0\"".to_string(),
                story: story.to_string(),
            },
        })
    }

    #[test]
    fn test_new_chain_has_genesis() {
        let chain = Chain::default();
        assert_eq!(chain.height(), 0);

        let genesis = chain.block_by_height(0).unwrap();
        assert!(genesis.is_genesis());
        assert!(matches!(
            genesis.decode_payload().unwrap(),
            BlockData::Genesis { marker } if marker == starledger_core::GENESIS_MARKER
        ));
    }

    #[test]
    fn test_append_links_to_tip() {
        let chain = Chain::default();
        let b1 = chain.append(&claim("addr1", "one")).unwrap();
        let b2 = chain.append(&claim("addr1", "two")).unwrap();

        let genesis = chain.block_by_height(0).unwrap();
        assert_eq!(b1.previous_hash, Some(genesis.hash));
        assert_eq!(b2.previous_hash, Some(b1.hash));
        assert_eq!(b1.height, 1);
        assert_eq!(b2.height, 2);
        assert_eq!(chain.height(), 2);
    }

    #[test]
    fn test_height_equals_position_for_all_blocks() {
        let chain = Chain::default();
        for i in 0..5 {
            chain.append(&claim("addr1", &format!("star {i}"))).unwrap();
        }
        for (i, block) in chain.blocks().iter().enumerate() {
            assert_eq!(block.height, i as u64);
        }
    }

    #[test]
    fn test_block_lookups() {
        let chain = Chain::default();
        let block = chain.append(&claim("addr1", "lookup me")).unwrap();

        assert_eq!(chain.block_by_hash(&block.hash).unwrap(), block);
        assert_eq!(chain.block_by_height(1).unwrap(), block);
        assert!(chain.block_by_hash(&BlockHash::from_bytes([0; 32])).is_none());
        assert!(chain.block_by_height(99).is_none());
    }

    #[test]
    fn test_claims_by_owner_filters() {
        let chain = Chain::default();
        chain.append(&claim("addr1", "a")).unwrap();
        chain.append(&claim("addr2", "b")).unwrap();
        chain.append(&claim("addr1", "c")).unwrap();

        let claims = chain.claims_by_owner(&WalletAddress::new("addr1")).unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].star.story, "a");
        assert_eq!(claims[1].star.story, "c");

        // No matches is an empty list, not an error; genesis is skipped.
        let none = chain.claims_by_owner(&WalletAddress::new("addr3")).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_validate_fresh_chain_is_clean() {
        let chain = Chain::default();
        for i in 0..4 {
            chain.append(&claim("addr1", &format!("star {i}"))).unwrap();
        }
        assert!(chain.validate().unwrap().is_empty());
    }

    #[test]
    fn test_custom_genesis_marker() {
        let chain = Chain::new(ChainConfig {
            genesis_marker: "registry origin".to_string(),
        });
        let genesis = chain.block_by_height(0).unwrap();
        assert!(matches!(
            genesis.decode_payload().unwrap(),
            BlockData::Genesis { marker } if marker == "registry origin"
        ));
    }
}
