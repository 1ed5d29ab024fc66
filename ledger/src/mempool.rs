//! Pending-transaction pool.
//!
//! Holds stateless-valid transactions waiting for inclusion in a block.
//! Stateful validity is only checked on demand: after each applied block the
//! node calls `validate_and_prune` to drop entries whose inputs were spent.

use crate::block::Block;
use crate::error::ChainError;
use crate::utxo::UtxoSet;
use crate::validate::validate_transaction_against;
use facet_transactions::{validation, Transaction};
use facet_types::{ChainParams, OutputId};
use std::collections::HashMap;

/// Pending transactions indexed by their id.
#[derive(Clone, Debug, Default)]
pub struct Mempool {
    transactions: HashMap<OutputId, Transaction>,
}

impl Mempool {
    pub fn new() -> Self {
        Self {
            transactions: HashMap::new(),
        }
    }

    /// Add a transaction after stateless validation.
    ///
    /// Coinbase transactions are rejected: they are built by the block
    /// producer, never relayed.
    pub fn insert(&mut self, tx: Transaction, params: &ChainParams) -> Result<(), ChainError> {
        let id = tx.id();

        if let Transaction::Coinbase(_) = tx {
            return Err(ChainError::InvalidTransaction {
                tx: id,
                reason: "coinbase transactions cannot enter the mempool".into(),
            });
        }
        if self.transactions.contains_key(&id) {
            return Err(ChainError::InvalidTransaction {
                tx: id,
                reason: "transaction already in mempool".into(),
            });
        }
        if self.transactions.len() >= params.max_mempool_transactions {
            return Err(ChainError::InvalidTransaction {
                tx: id,
                reason: "mempool is full".into(),
            });
        }
        validation::validate_transaction(&tx, params).map_err(|err| {
            ChainError::InvalidTransaction {
                tx: id,
                reason: err.to_string(),
            }
        })?;

        self.transactions.insert(id, tx);
        Ok(())
    }

    pub fn remove(&mut self, id: &OutputId) -> Option<Transaction> {
        self.transactions.remove(id)
    }

    /// Drop every transaction confirmed by an applied block.
    pub fn remove_confirmed(&mut self, block: &Block) {
        for tx in &block.transactions {
            self.transactions.remove(&tx.id());
        }
    }

    pub fn get(&self, id: &OutputId) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// Re-check every pending transaction against the current state and drop
    /// the ones that no longer validate. Returns how many were dropped.
    pub fn validate_and_prune(&mut self, state: &UtxoSet, params: &ChainParams) -> usize {
        let stale: Vec<OutputId> = self
            .transactions
            .iter()
            .filter(|(_, tx)| validate_transaction_against(tx, state, params).is_err())
            .map(|(id, _)| *id)
            .collect();

        for id in &stale {
            self.transactions.remove(id);
        }
        stale.len()
    }
}
