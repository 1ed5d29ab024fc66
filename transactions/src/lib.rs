//! Facet transaction kinds and their stateless validation.
//!
//! Transaction kinds:
//! - **Coinbase**: mint a new asset unit with no input
//! - **Subdivision**: consume one unit, mint several whose values sum to it
//! - **Transfer**: re-key one unit to a new owner, value unchanged
//!
//! Stateful checks (input existence, conservation against the actual parent,
//! ownership) live in `facet-ledger`; this crate validates everything a
//! transaction carries on its own.

pub mod coinbase;
pub mod error;
pub mod subdivision;
pub mod transfer;
pub mod validation;

pub use coinbase::CoinbaseTx;
pub use error::TransactionError;
pub use subdivision::{SubdivisionOutput, SubdivisionTx};
pub use transfer::TransferTx;

use facet_types::OutputId;
use serde::{Deserialize, Serialize};

/// The unified transaction enum wrapping all facet transaction kinds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Transaction {
    Coinbase(CoinbaseTx),
    Subdivision(SubdivisionTx),
    Transfer(TransferTx),
}

impl Transaction {
    /// The canonical identifier of this transaction: a Blake2b-256 hash of
    /// its defining fields. Signatures are excluded so the id is stable
    /// across signing.
    pub fn id(&self) -> OutputId {
        match self {
            Self::Coinbase(tx) => tx.id(),
            Self::Subdivision(tx) => tx.id(),
            Self::Transfer(tx) => tx.id(),
        }
    }

    /// Short kind name, used in error reasons and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Coinbase(_) => "coinbase",
            Self::Subdivision(_) => "subdivision",
            Self::Transfer(_) => "transfer",
        }
    }
}
