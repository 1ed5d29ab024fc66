//! Fundamental types for the facet ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: output identifiers, unit values, owner tags, key material, and
//! protocol parameters.

pub mod id;
pub mod keys;
pub mod owner;
pub mod params;
pub mod unit;

pub use id::OutputId;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use owner::OwnerId;
pub use params::ChainParams;
pub use unit::{AssetUnit, UnitValue};
