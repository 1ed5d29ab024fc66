//! Coinbase transaction: mint a new asset unit with no input.

use facet_crypto::blake2b_256_multi;
use facet_types::{OutputId, OwnerId, UnitValue};
use serde::{Deserialize, Serialize};

/// A coinbase transaction.
///
/// Mints one new unit of `reward` owned by `beneficiary`, under an identifier
/// derived from the transaction itself. The nonce distinguishes repeated
/// rewards to the same beneficiary, which would otherwise hash identically
/// and collide in the unspent set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinbaseTx {
    pub reward: UnitValue,
    pub beneficiary: OwnerId,
    pub nonce: u64,
}

impl CoinbaseTx {
    pub fn new(reward: UnitValue, beneficiary: OwnerId, nonce: u64) -> Self {
        Self {
            reward,
            beneficiary,
            nonce,
        }
    }

    /// Canonical transaction identifier, also the id of the minted output.
    pub fn id(&self) -> OutputId {
        let hash = blake2b_256_multi(&[
            b"coinbase",
            &self.reward.raw().to_be_bytes(),
            self.beneficiary.as_str().as_bytes(),
            &self.nonce.to_be_bytes(),
        ]);
        OutputId::new(hash)
    }
}
