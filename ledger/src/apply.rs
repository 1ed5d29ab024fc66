//! Block application, the mutating second pass.
//!
//! Runs only on a block the validator accepted, in the same transaction
//! order. Every failure here is an invariant breach: validation guaranteed
//! each remove and insert succeeds, so a miss or collision means the
//! validate/apply contract or the serialization discipline is broken.

use crate::block::Block;
use crate::error::ChainError;
use crate::utxo::UtxoSet;
use facet_transactions::Transaction;
use facet_types::AssetUnit;

/// Replay an accepted block against the state, mutating it exactly once per
/// transaction. Call only after [`validate_block`](crate::validate::validate_block)
/// succeeded on the identical block/state pair.
///
/// On error the state must be treated as corrupt: some transactions may have
/// been applied. Surface the error, do not retry.
pub fn apply_block(block: &Block, state: &mut UtxoSet) -> Result<(), ChainError> {
    for tx in &block.transactions {
        apply_transaction(tx, state)?;
    }
    Ok(())
}

/// Apply one transaction's effect. Consumed inputs are removed before any
/// output is inserted, so a consumed identifier can never double as a fresh
/// output within the same transaction.
pub(crate) fn apply_transaction(tx: &Transaction, state: &mut UtxoSet) -> Result<(), ChainError> {
    match tx {
        Transaction::Coinbase(cb) => {
            state.insert(cb.id(), AssetUnit::new(cb.reward, cb.beneficiary.clone()))?;
        }
        Transaction::Subdivision(sub) => {
            state.remove(&sub.parent)?;
            for (index, output) in sub.outputs.iter().enumerate() {
                state.insert(
                    sub.output_id(index),
                    AssetUnit::new(output.value, output.owner.clone()),
                )?;
            }
        }
        Transaction::Transfer(tr) => {
            let unit = state.remove(&tr.input)?;
            state.insert(tr.output_id(), unit.reowned(tr.new_owner.clone()))?;
        }
    }
    Ok(())
}
