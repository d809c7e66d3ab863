//! Block payloads: the genesis marker and owner-tagged star claims.
//!
//! Payloads are stored as CBOR bytes inside a block and decoded on demand.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::WalletAddress;

/// The well-known marker sealed into a freshly bootstrapped chain.
pub const GENESIS_MARKER: &str = "Genesis Block";

/// A star as claimed by its owner: celestial coordinates plus a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Right ascension, e.g. `"16h 29m 1.0s"`.
    pub ra: String,

    /// Declination, e.g. `"68° 52' 56.9\""`.
    pub dec: String,

    /// Free-text story attached to the claim.
    pub story: String,
}

/// A star claim: the verified owner alongside the star itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarClaim {
    /// The wallet address whose ownership proof authorized this claim.
    pub owner: WalletAddress,

    /// The claimed star.
    pub star: StarRecord,
}

/// The decoded form of a block payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockData {
    /// The fixed marker of the first block in a chain.
    Genesis {
        /// Marker text, [`GENESIS_MARKER`] by default.
        marker: String,
    },

    /// A star claim recorded on behalf of a verified owner.
    Star(StarClaim),
}

impl BlockData {
    /// The default genesis payload.
    pub fn genesis() -> Self {
        Self::Genesis {
            marker: GENESIS_MARKER.to_string(),
        }
    }

    /// The owner this payload is tagged with, if any.
    ///
    /// Genesis payloads carry no owner.
    pub fn owner(&self) -> Option<&WalletAddress> {
        match self {
            BlockData::Genesis { .. } => None,
            BlockData::Star(claim) => Some(&claim.owner),
        }
    }

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|e| CoreError::Encoding(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        ciborium::from_reader(bytes).map_err(|e| CoreError::Decoding(e.to_string()))
    }
}
