//! The ledger: exclusive owner of the unspent-output set.

use crate::apply::apply_block;
use crate::block::Block;
use crate::error::ChainError;
use crate::genesis::genesis_state;
use crate::utxo::UtxoSet;
use crate::validate::validate_block;
use facet_types::{ChainParams, OwnerId, UnitValue};
use tracing::{debug, error, warn};

/// Holds the current unspent-output set and advances it one block at a time.
///
/// Only `process_block` mutates the state, and only after a full validation
/// pass over the same block succeeded. Applications are serialized by the
/// exclusive `&mut self` borrow.
pub struct Ledger {
    state: UtxoSet,
    params: ChainParams,
}

impl Ledger {
    /// A ledger bootstrapped with the genesis entry owned by `genesis_owner`.
    pub fn new(genesis_owner: &OwnerId, params: ChainParams) -> Self {
        Self {
            state: genesis_state(&params, genesis_owner),
            params,
        }
    }

    /// A ledger with no outputs at all. Coinbase transactions are the only
    /// way value enters it.
    pub fn empty(params: ChainParams) -> Self {
        Self {
            state: UtxoSet::new(),
            params,
        }
    }

    /// Adopt an externally supplied state (e.g. restored by the embedding
    /// node; persistence itself is not this crate's concern).
    pub fn with_state(state: UtxoSet, params: ChainParams) -> Self {
        Self { state, params }
    }

    pub fn state(&self) -> &UtxoSet {
        &self.state
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Read-only validation of a candidate block against the current state.
    pub fn validate_block(&self, block: &Block) -> Result<(), ChainError> {
        validate_block(block, &self.state, &self.params)
    }

    /// Validate and, if accepted, apply a candidate block.
    ///
    /// Rejection leaves the state untouched. An `InvariantViolation` means
    /// the state is corrupt and must not be advanced further.
    pub fn process_block(&mut self, block: &Block) -> Result<(), ChainError> {
        if let Err(err) = self.validate_block(block) {
            warn!(transactions = block.len(), %err, "rejecting candidate block");
            return Err(err);
        }
        if let Err(err) = apply_block(block, &mut self.state) {
            error!(%err, "block application failed after successful validation");
            return Err(err);
        }
        debug!(
            transactions = block.len(),
            outputs = self.state.len(),
            "block applied"
        );
        Ok(())
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            outputs: self.state.len(),
            total_value: self.state.total_value(),
        }
    }
}

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub outputs: usize,
    pub total_value: UnitValue,
}
