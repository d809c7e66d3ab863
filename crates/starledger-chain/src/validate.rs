//! Chain integrity validation: full-scan tamper and linkage checks.
//!
//! The validator accumulates every violation it finds instead of stopping
//! at the first one; only a failure of the hashing primitive itself aborts
//! the scan.

use starledger_core::{Block, CoreError};

/// A specific integrity violation detected during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainViolation {
    /// Height of the offending block.
    pub height: u64,

    /// What kind of violation was detected.
    pub kind: ViolationKind,
}

/// The kinds of violation a chain scan can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The block's stored hash no longer matches its recomputed hash:
    /// its fields were changed after sealing.
    HashMismatch,

    /// The block's predecessor link does not match the recomputed hash
    /// of the block before it.
    BrokenLink,

    /// The block claims a predecessor, but none exists at the previous
    /// position. Unreachable through the append engine; reported when
    /// validating an externally assembled snapshot.
    MissingPredecessor,
}

/// Validate a height-ordered block sequence.
///
/// Returns all detected violations in ascending height order; a block may
/// contribute more than one. An empty list means the sequence is intact.
pub fn validate_blocks(blocks: &[Block]) -> Result<Vec<ChainViolation>, CoreError> {
    let mut violations = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        let height = i as u64;

        if !block.self_validate()? {
            violations.push(ChainViolation {
                height,
                kind: ViolationKind::HashMismatch,
            });
        }

        if i == 0 {
            if block.previous_hash.is_some() {
                violations.push(ChainViolation {
                    height,
                    kind: ViolationKind::MissingPredecessor,
                });
            }
        } else {
            let expected = blocks[i - 1].compute_hash()?;
            if block.previous_hash != Some(expected) {
                violations.push(ChainViolation {
                    height,
                    kind: ViolationKind::BrokenLink,
                });
            }
        }
    }

    Ok(violations)
}
