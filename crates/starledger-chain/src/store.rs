//! In-memory block store: the dense, ordered sequence of sealed blocks.
//!
//! The vector index is the block height. Only the append engine in this
//! crate may push; everything else reads.

use std::collections::HashMap;

use starledger_core::{Block, BlockHash};

/// The ordered sequence of sealed blocks plus a content-address index.
///
/// Invariant: `blocks` is dense and contiguous in height starting at 0,
/// and `by_hash` maps every stored block's hash to its height.
#[derive(Debug, Default)]
pub struct BlockStore {
    blocks: Vec<Block>,
    by_hash: HashMap<BlockHash, u64>,
}

impl BlockStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The last block in the chain, if any.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Get a block by height.
    pub fn get(&self, height: u64) -> Option<&Block> {
        usize::try_from(height).ok().and_then(|i| self.blocks.get(i))
    }

    /// Get a block by its content hash.
    pub fn get_by_hash(&self, hash: &BlockHash) -> Option<&Block> {
        self.by_hash.get(hash).and_then(|&height| self.get(height))
    }

    /// All stored blocks, in height order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a sealed block.
    ///
    /// Callers must seal with `height == self.len()` and
    /// `previous_hash == self.tip().map(|b| b.hash)`; the append engine is
    /// the only caller.
    pub(crate) fn push(&mut self, block: Block) {
        self.by_hash.insert(block.hash, block.height);
        self.blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starledger_core::BlockData;

    fn sealed(height: u64, previous_hash: Option<BlockHash>) -> Block {
        let payload = BlockData::genesis().to_bytes().unwrap();
        Block::seal(height, 1000 + height as i64, previous_hash, payload).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = BlockStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.tip().is_none());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn test_push_and_lookup() {
        let mut store = BlockStore::new();
        let genesis = sealed(0, None);
        let genesis_hash = genesis.hash;
        store.push(genesis);

        let next = sealed(1, Some(genesis_hash));
        let next_hash = next.hash;
        store.push(next);

        assert_eq!(store.len(), 2);
        assert_eq!(store.tip().unwrap().hash, next_hash);
        assert_eq!(store.get(0).unwrap().hash, genesis_hash);
        assert_eq!(store.get_by_hash(&next_hash).unwrap().height, 1);
        assert!(store.get(2).is_none());
        assert!(store
            .get_by_hash(&BlockHash::from_bytes([0xff; 32]))
            .is_none());
    }
}
