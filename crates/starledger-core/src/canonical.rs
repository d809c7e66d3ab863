//! Canonical encoding of a block's sealed fields.
//!
//! The seal bytes are a domain-separation prefix followed by a CBOR map
//! with integer keys. The map is built with its keys already in ascending
//! order and encoded with definite lengths, so the same sealed fields
//! produce identical bytes (and thus an identical hash) on every platform.

use ciborium::value::Value;

use crate::error::CoreError;
use crate::types::BlockHash;

/// The current seal schema version.
pub const SEAL_VERSION: u8 = 0;

/// Domain prefix mixed into every seal hash.
pub const SEAL_DOMAIN: &[u8] = b"starledger/block-seal/v0:";

/// Seal field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const VERSION: u64 = 0;
    pub const HEIGHT: u64 = 1;
    pub const TIMESTAMP: u64 = 2;
    pub const PREV_HASH: u64 = 3;
    pub const PAYLOAD: u64 = 4;
}

/// Encode a block's sealed fields to canonical bytes.
///
/// Covers every field except the hash itself: height, timestamp, the
/// predecessor link (CBOR null for the genesis sentinel), and the payload.
pub fn seal_bytes(
    height: u64,
    timestamp_ms: i64,
    previous_hash: Option<&BlockHash>,
    payload: &[u8],
) -> Result<Vec<u8>, CoreError> {
    let prev_value = match previous_hash {
        Some(hash) => Value::Bytes(hash.0.to_vec()),
        None => Value::Null,
    };

    // Entries are pushed in key order (0-4); ciborium preserves it.
    let map = Value::Map(vec![
        (
            Value::Integer(keys::VERSION.into()),
            Value::Integer(SEAL_VERSION.into()),
        ),
        (
            Value::Integer(keys::HEIGHT.into()),
            Value::Integer(height.into()),
        ),
        (
            Value::Integer(keys::TIMESTAMP.into()),
            Value::Integer(timestamp_ms.into()),
        ),
        (Value::Integer(keys::PREV_HASH.into()), prev_value),
        (
            Value::Integer(keys::PAYLOAD.into()),
            Value::Bytes(payload.to_vec()),
        ),
    ]);

    let mut buf = Vec::from(SEAL_DOMAIN);
    ciborium::into_writer(&map, &mut buf).map_err(|e| CoreError::Encoding(e.to_string()))?;
    Ok(buf)
}

/// Compute the content hash of a block's sealed fields.
pub fn compute_block_hash(
    height: u64,
    timestamp_ms: i64,
    previous_hash: Option<&BlockHash>,
    payload: &[u8],
) -> Result<BlockHash, CoreError> {
    let bytes = seal_bytes(height, timestamp_ms, previous_hash, payload)?;
    Ok(BlockHash::hash(&bytes))
}
