//! # Starledger Testkit
//!
//! Testing utilities for the star registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Helper structs for setting up registry test scenarios,
//!   including the full request/sign/submit round and payload tampering
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use starledger_testkit::generators::{block_data, seal_chain};
//!
//! proptest! {
//!     #[test]
//!     fn chains_validate(payloads in proptest::collection::vec(block_data(), 0..8)) {
//!         let blocks = seal_chain(&payloads);
//!         prop_assert!(starledger_chain::validate_blocks(&blocks).unwrap().is_empty());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{
    expired_proof, flip_payload_byte, multi_owner_keypairs, sample_star, TestFixture,
};
