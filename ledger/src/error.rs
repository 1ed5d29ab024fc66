use facet_types::OutputId;
use thiserror::Error;

/// Why a block or transaction was rejected, or why the ledger state is
/// no longer trustworthy.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Recoverable: one transaction failed validation, so the whole
    /// candidate block is rejected. No state was mutated.
    #[error("invalid transaction {tx}: {reason}")]
    InvalidTransaction { tx: OutputId, reason: String },

    /// Recoverable: the block's structure is wrong (coinbase placement).
    #[error("invalid block: {reason}")]
    InvalidBlock { reason: String },

    /// Internal: a lookup missed during validation. Always converted to
    /// `InvalidTransaction` before crossing the validator boundary.
    #[error("output not found: {0}")]
    NotFound(OutputId),

    /// Fatal: a precondition that validation guaranteed no longer held at
    /// apply time. The state must be treated as corrupt; do not retry.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl ChainError {
    /// Whether this error is a normal candidate rejection (as opposed to a
    /// fatal fault requiring manual intervention).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransaction { .. } | Self::InvalidBlock { .. } | Self::NotFound(_)
        )
    }
}
