//! UTXO state and block processing for the facet ledger.
//!
//! A candidate block goes through two passes: a read-only validation pass
//! over every transaction, then, only if the whole block passed, an apply
//! pass that mutates the unspent-output set exactly once per transaction.
//! No partial mutation is ever visible: a rejected block leaves the state
//! untouched, and apply-time failures are invariant breaches, not normal
//! rejections.
//!
//! Block processing is serialized: one block is fully validated and applied
//! before the next begins. Validation of independent candidates may run in
//! parallel against snapshots, but only one may commit per state version.

pub mod apply;
pub mod block;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod mempool;
pub mod utxo;
pub mod validate;

pub use apply::apply_block;
pub use block::Block;
pub use error::ChainError;
pub use genesis::{genesis_entry, genesis_state};
pub use ledger::{Ledger, LedgerSummary};
pub use mempool::Mempool;
pub use utxo::UtxoSet;
pub use validate::{validate_block, validate_transaction_against};
