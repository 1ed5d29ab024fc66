//! Read-only block validation.
//!
//! A candidate block moves from pending to accepted or rejected in one pass:
//! transactions are checked in block order and the first failure rejects the
//! whole block. The persisted state is never touched: stateful checks run
//! against a private working copy that replays each transaction as it
//! passes, so a transaction may spend an output minted earlier in the same
//! block, and an intra-block double spend is caught here instead of
//! surfacing as a fatal apply error.

use crate::apply::apply_transaction;
use crate::block::Block;
use crate::error::ChainError;
use crate::utxo::UtxoSet;
use facet_crypto::derive_owner;
use facet_transactions::{validation, SubdivisionTx, Transaction, TransferTx};
use facet_types::{AssetUnit, ChainParams, OutputId, PublicKey, UnitValue};

/// Validate a candidate block against the current state without mutating it.
///
/// `Ok(())` means every transaction passed and the block may be handed to
/// [`apply_block`](crate::apply::apply_block) against the same state.
pub fn validate_block(
    block: &Block,
    state: &UtxoSet,
    params: &ChainParams,
) -> Result<(), ChainError> {
    check_coinbase_placement(block)?;

    let mut view = state.clone();
    for tx in &block.transactions {
        validate_transaction_against(tx, &view, params)?;
        // The checks above guarantee this speculative replay succeeds; a
        // failure would be the same invariant breach apply_block reports.
        apply_transaction(tx, &mut view)?;
    }
    Ok(())
}

/// Validate a single transaction against a state snapshot: intrinsic
/// structure and signature first, then kind-specific stateful checks.
pub fn validate_transaction_against(
    tx: &Transaction,
    state: &UtxoSet,
    params: &ChainParams,
) -> Result<(), ChainError> {
    validation::validate_transaction(tx, params).map_err(|err| ChainError::InvalidTransaction {
        tx: tx.id(),
        reason: err.to_string(),
    })?;

    match tx {
        Transaction::Coinbase(cb) => {
            check_mintable(tx.id(), cb.id(), state)?;
        }
        Transaction::Subdivision(sub) => check_subdivision(sub, state)?,
        Transaction::Transfer(tr) => check_transfer(tr, state)?,
    }
    Ok(())
}

/// At most one coinbase per block, and it must come first.
fn check_coinbase_placement(block: &Block) -> Result<(), ChainError> {
    let mut coinbase_count = 0usize;
    for (i, tx) in block.transactions.iter().enumerate() {
        if let Transaction::Coinbase(_) = tx {
            coinbase_count += 1;
            if i != 0 {
                return Err(ChainError::InvalidBlock {
                    reason: "coinbase must be the first transaction in the block".into(),
                });
            }
        }
    }
    if coinbase_count > 1 {
        return Err(ChainError::InvalidBlock {
            reason: format!("block contains {coinbase_count} coinbase transactions, maximum is 1"),
        });
    }
    Ok(())
}

fn check_subdivision(tx: &SubdivisionTx, state: &UtxoSet) -> Result<(), ChainError> {
    let txid = tx.id();
    let parent = lookup(state, &tx.parent, |id| {
        format!("Subdivision parent {id} not in UTXO set")
    })
    .map_err(|reason| ChainError::InvalidTransaction { tx: txid, reason })?;

    check_ownership(txid, parent, &tx.public_key, &tx.parent)?;

    // Conservation: output values must sum exactly to the parent's value.
    let mut total = UnitValue::ZERO;
    for output in &tx.outputs {
        total = total
            .checked_add(output.value)
            .ok_or_else(|| ChainError::InvalidTransaction {
                tx: txid,
                reason: "subdivision output values overflow".into(),
            })?;
    }
    if total != parent.value {
        return Err(ChainError::InvalidTransaction {
            tx: txid,
            reason: format!(
                "subdivision outputs total {total} but parent holds {}",
                parent.value
            ),
        });
    }

    // Derived output identifiers must be fresh and mutually distinct.
    for index in 0..tx.outputs.len() {
        let output_id = tx.output_id(index);
        check_mintable(txid, output_id, state)?;
        for later in index + 1..tx.outputs.len() {
            if tx.output_id(later) == output_id {
                return Err(ChainError::InvalidTransaction {
                    tx: txid,
                    reason: format!("subdivision mints output {output_id} twice"),
                });
            }
        }
    }
    Ok(())
}

fn check_transfer(tx: &TransferTx, state: &UtxoSet) -> Result<(), ChainError> {
    let txid = tx.id();
    let input = lookup(state, &tx.input, |id| {
        format!("Transfer input {id} not in UTXO set")
    })
    .map_err(|reason| ChainError::InvalidTransaction { tx: txid, reason })?;

    check_ownership(txid, input, &tx.public_key, &tx.input)?;
    check_mintable(txid, tx.output_id(), state)
}

/// Resolve an input, converting the internal `NotFound` into the
/// caller-facing rejection reason. `NotFound` never leaves the validator.
fn lookup<'a>(
    state: &'a UtxoSet,
    id: &OutputId,
    missing: impl FnOnce(&OutputId) -> String,
) -> Result<&'a AssetUnit, String> {
    match state.get(id) {
        Ok(unit) => Ok(unit),
        Err(_) => Err(missing(id)),
    }
}

/// The spending key must own the consumed unit.
fn check_ownership(
    txid: OutputId,
    unit: &AssetUnit,
    public_key: &PublicKey,
    consumed: &OutputId,
) -> Result<(), ChainError> {
    if derive_owner(public_key) != unit.owner {
        return Err(ChainError::InvalidTransaction {
            tx: txid,
            reason: format!("not signed by the owner of {consumed}"),
        });
    }
    Ok(())
}

/// A minted identifier must not collide with an existing entry.
fn check_mintable(txid: OutputId, output: OutputId, state: &UtxoSet) -> Result<(), ChainError> {
    if state.contains(&output) {
        return Err(ChainError::InvalidTransaction {
            tx: txid,
            reason: format!("output {output} already exists in UTXO set"),
        });
    }
    Ok(())
}
