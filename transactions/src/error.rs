use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("transaction must be signed")]
    NotSigned,

    #[error("invalid signature on transaction {tx}")]
    InvalidSignature { tx: String },

    #[error("amount must be positive")]
    ZeroAmount,

    #[error("coinbase reward {reward} exceeds maximum {max}")]
    RewardTooLarge { reward: u128, max: u128 },

    #[error("subdivision must mint at least one output")]
    NoOutputs,

    #[error("subdivision mints {count} outputs, maximum is {max}")]
    TooManyOutputs { count: usize, max: usize },

    #[error("{0}")]
    Other(String),
}
