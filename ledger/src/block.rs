//! Candidate blocks: ordered sequences of transactions.

use facet_crypto::blake2b_256_multi;
use facet_transactions::Transaction;
use serde::{Deserialize, Serialize};

/// An ordered sequence of transactions proposed for application.
///
/// Order matters: a later transaction may spend an output minted earlier in
/// the same block (see `validate::validate_block`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Merkle root over the transaction ids.
    ///
    /// Pairwise Blake2b-256; an odd leaf is paired with itself. Empty blocks
    /// hash to the zero root.
    pub fn merkle_root(&self) -> [u8; 32] {
        if self.transactions.is_empty() {
            return [0u8; 32];
        }

        let mut level: Vec<[u8; 32]> = self
            .transactions
            .iter()
            .map(|tx| *tx.id().as_bytes())
            .collect();

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                let right = if pair.len() == 2 { &pair[1] } else { &pair[0] };
                next.push(blake2b_256_multi(&[&pair[0], right]));
            }
            level = next;
        }

        level[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_transactions::CoinbaseTx;
    use facet_types::{OwnerId, UnitValue};

    fn coinbase(nonce: u64) -> Transaction {
        Transaction::Coinbase(CoinbaseTx::new(
            UnitValue::new(100),
            OwnerId::new("miner"),
            nonce,
        ))
    }

    #[test]
    fn empty_block_has_zero_root() {
        assert_eq!(Block::new(vec![]).merkle_root(), [0u8; 32]);
    }

    #[test]
    fn root_is_deterministic() {
        let block = Block::new(vec![coinbase(1), coinbase(2)]);
        assert_eq!(block.merkle_root(), block.merkle_root());
    }

    #[test]
    fn root_depends_on_order() {
        let forward = Block::new(vec![coinbase(1), coinbase(2)]);
        let reversed = Block::new(vec![coinbase(2), coinbase(1)]);
        assert_ne!(forward.merkle_root(), reversed.merkle_root());
    }

    #[test]
    fn odd_leaf_count_roots() {
        let block = Block::new(vec![coinbase(1), coinbase(2), coinbase(3)]);
        assert_ne!(block.merkle_root(), [0u8; 32]);
    }

    #[test]
    fn single_transaction_root_is_its_id() {
        let block = Block::new(vec![coinbase(1)]);
        assert_eq!(block.merkle_root(), *coinbase(1).id().as_bytes());
    }
}
