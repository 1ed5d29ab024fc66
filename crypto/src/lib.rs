//! Cryptographic primitives for the facet ledger.
//!
//! - **Ed25519** for spend-authorization signing and verification
//! - **Blake2b-256** for hashing and output-identifier derivation
//! - Owner-tag derivation with the `fct_` prefix

pub mod hash;
pub mod keys;
pub mod owner;
pub mod sign;

pub use hash::{
    blake2b_256, blake2b_256_multi, derive_subdivision_output, derive_transfer_output,
};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use owner::derive_owner;
pub use sign::{sign_message, verify_signature};
