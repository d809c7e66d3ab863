//! Block: one immutable, hash-linked entry in the ledger.
//!
//! A block is sealed exactly once: the append engine fixes its linkage
//! fields and content hash, and nothing overwrites them afterwards.
//! Changes to the chain are new blocks.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::compute_block_hash;
use crate::error::CoreError;
use crate::payload::BlockData;
use crate::types::BlockHash;

/// A sealed ledger block.
///
/// `hash` is a deterministic function of every other field, including
/// `previous_hash`. It is computed by [`Block::seal`] and never mutated;
/// [`Block::compute_hash`] re-derives it without touching the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Zero-based position in the chain, equal to insertion order.
    pub height: u64,

    /// Creation time (Unix milliseconds).
    pub timestamp_ms: i64,

    /// Hash of the predecessor block, or `None` for the first block.
    pub previous_hash: Option<BlockHash>,

    /// CBOR-encoded [`BlockData`].
    pub payload: Bytes,

    /// Content hash over all sealed fields.
    pub hash: BlockHash,
}

impl Block {
    /// Seal a block: fix its linkage fields and compute its content hash.
    pub fn seal(
        height: u64,
        timestamp_ms: i64,
        previous_hash: Option<BlockHash>,
        payload: impl Into<Bytes>,
    ) -> Result<Self, CoreError> {
        let payload = payload.into();
        let hash = compute_block_hash(height, timestamp_ms, previous_hash.as_ref(), &payload)?;
        Ok(Self {
            height,
            timestamp_ms,
            previous_hash,
            payload,
            hash,
        })
    }

    /// Re-derive the content hash from the current field values.
    ///
    /// Does not overwrite the stored `hash`.
    pub fn compute_hash(&self) -> Result<BlockHash, CoreError> {
        compute_block_hash(
            self.height,
            self.timestamp_ms,
            self.previous_hash.as_ref(),
            &self.payload,
        )
    }

    /// Check that the stored hash still matches the recomputed one.
    ///
    /// `false` means the block's fields were changed after sealing.
    pub fn self_validate(&self) -> Result<bool, CoreError> {
        Ok(self.compute_hash()? == self.hash)
    }

    /// Decode the payload into structured [`BlockData`].
    pub fn decode_payload(&self) -> Result<BlockData, CoreError> {
        BlockData::from_bytes(&self.payload)
    }

    /// Check if this is a genesis block (height 0, no predecessor).
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{StarClaim, StarRecord};
    use crate::types::WalletAddress;

    fn star_payload(owner: &str) -> Bytes {
        BlockData::Star(StarClaim {
            owner: WalletAddress::new(owner),
            star: StarRecord {
                ra: "5h 55m 10.3s".to_string(),
                dec: "7° 24' 25.4\"".to_string(),
                story: "Betelgeuse".to_string(),
            },
        })
        .to_bytes()
        .unwrap()
        .into()
    }

    #[test]
    fn test_seal_is_deterministic() {
        let prev = BlockHash::from_bytes([0xaa; 32]);
        let b1 = Block::seal(1, 1736870400000, Some(prev), star_payload("addr1")).unwrap();
        let b2 = Block::seal(1, 1736870400000, Some(prev), star_payload("addr1")).unwrap();
        assert_eq!(b1.hash, b2.hash);
    }

    #[test]
    fn test_sealed_block_self_validates() {
        let block = Block::seal(0, 1000, None, star_payload("addr1")).unwrap();
        assert!(block.self_validate().unwrap());
        assert!(block.is_genesis());
    }

    #[test]
    fn test_tampered_payload_fails_self_validation() {
        let block = Block::seal(0, 1000, None, star_payload("addr1")).unwrap();

        let mut bytes = block.payload.to_vec();
        bytes[0] ^= 0x01;
        let tampered = Block {
            payload: bytes.into(),
            ..block
        };

        assert!(!tampered.self_validate().unwrap());
    }

    #[test]
    fn test_tampered_linkage_fails_self_validation() {
        let prev = BlockHash::from_bytes([0xaa; 32]);
        let block = Block::seal(2, 1000, Some(prev), star_payload("addr1")).unwrap();

        let rewired = Block {
            previous_hash: Some(BlockHash::from_bytes([0xbb; 32])),
            ..block
        };

        assert!(!rewired.self_validate().unwrap());
    }

    #[test]
    fn test_decode_payload_roundtrip() {
        let block = Block::seal(0, 1000, None, star_payload("addr1")).unwrap();
        let data = block.decode_payload().unwrap();
        assert_eq!(
            data.owner(),
            Some(&WalletAddress::new("addr1"))
        );
    }

    #[test]
    fn test_block_json_roundtrip() {
        // API layers hand blocks out as JSON; the sealed fields must survive.
        let block = Block::seal(0, 1000, None, star_payload("addr1")).unwrap();
        let json = serde_json::to_string(&block).unwrap();
        let recovered: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block, recovered);
        assert!(recovered.self_validate().unwrap());
    }
}
