//! Proptest generators for property-based testing.

use proptest::prelude::*;

use starledger_core::{
    Block, BlockData, BlockHash, Keypair, StarClaim, StarRecord, WalletAddress,
};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random block hash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate a wallet address derived from a real keypair.
pub fn wallet_address() -> impl Strategy<Value = WalletAddress> {
    keypair().prop_map(|kp| kp.address())
}

/// Generate a star story.
pub fn story() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}".prop_map(String::from)
}

/// Generate a star record.
pub fn star_record() -> impl Strategy<Value = StarRecord> {
    (
        "[0-9]{1,2}h [0-9]{1,2}m [0-9]{1,2}s",
        "-?[0-9]{1,2}° [0-9]{1,2}' [0-9]{1,2}\"",
        story(),
    )
        .prop_map(|(ra, dec, story)| StarRecord { ra, dec, story })
}

/// Generate a block payload: genesis marker or owned star claim.
pub fn block_data() -> impl Strategy<Value = BlockData> {
    prop_oneof![
        "[a-zA-Z ]{1,32}".prop_map(|marker| BlockData::Genesis { marker }),
        (wallet_address(), star_record())
            .prop_map(|(owner, star)| BlockData::Star(StarClaim { owner, star })),
    ]
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Build a sealed chain from a list of payloads, genesis first.
pub fn seal_chain(payloads: &[BlockData]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::with_capacity(payloads.len());
    for (i, data) in payloads.iter().enumerate() {
        let prev = blocks.last().map(|b| b.hash);
        let bytes = data.to_bytes().expect("generated payloads encode");
        let block = Block::seal(i as u64, 1000 + i as i64, prev, bytes)
            .expect("generated payloads seal");
        blocks.push(block);
    }
    blocks
}
