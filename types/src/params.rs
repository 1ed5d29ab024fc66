//! Chain policy parameters.

use crate::unit::UnitValue;
use serde::{Deserialize, Serialize};

/// Policy bounds enforced by transaction and block validation.
///
/// These are fixed per deployment; facet has no on-chain governance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainParams {
    /// Value minted by the genesis output.
    pub genesis_supply: UnitValue,

    /// Upper bound on a single coinbase reward. Rewards of zero are always
    /// rejected, so the valid range is `1..=max_coinbase_reward`.
    pub max_coinbase_reward: UnitValue,

    /// Maximum number of outputs a single subdivision may mint.
    pub max_subdivision_outputs: usize,

    /// Maximum number of pending transactions held by the mempool.
    pub max_mempool_transactions: usize,
}

impl ChainParams {
    pub fn defaults() -> Self {
        Self {
            genesis_supply: UnitValue::new(1_000_000),
            max_coinbase_reward: UnitValue::new(10_000),
            max_subdivision_outputs: 64,
            max_mempool_transactions: 10_000,
        }
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::defaults()
    }
}
