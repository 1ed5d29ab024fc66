//! Stateless transaction validation.
//!
//! Everything here is checked against the transaction alone plus the chain
//! policy parameters. Stateful checks (input existence, conservation against
//! the actual parent value, ownership) are done by the ledger.

use crate::error::TransactionError;
use crate::{CoinbaseTx, SubdivisionTx, Transaction, TransferTx};
use facet_crypto::verify_signature;
use facet_types::{ChainParams, PublicKey, Signature};

/// Validate a transaction's intrinsic structure and signature.
pub fn validate_transaction(
    tx: &Transaction,
    params: &ChainParams,
) -> Result<(), TransactionError> {
    match tx {
        Transaction::Coinbase(cb) => validate_coinbase(cb, params),
        Transaction::Subdivision(sub) => validate_subdivision(sub, params),
        Transaction::Transfer(tr) => validate_transfer(tr),
    }
}

/// Validate a coinbase transaction: reward within policy bounds.
pub fn validate_coinbase(tx: &CoinbaseTx, params: &ChainParams) -> Result<(), TransactionError> {
    if tx.reward.is_zero() {
        return Err(TransactionError::ZeroAmount);
    }
    if tx.reward > params.max_coinbase_reward {
        return Err(TransactionError::RewardTooLarge {
            reward: tx.reward.raw(),
            max: params.max_coinbase_reward.raw(),
        });
    }
    if tx.beneficiary.is_empty() {
        return Err(TransactionError::Other(
            "coinbase beneficiary must not be empty".into(),
        ));
    }
    Ok(())
}

/// Validate a subdivision transaction: output shape and signature.
pub fn validate_subdivision(
    tx: &SubdivisionTx,
    params: &ChainParams,
) -> Result<(), TransactionError> {
    if tx.parent.is_zero() {
        return Err(TransactionError::Other(
            "subdivision parent identifier must not be zero".into(),
        ));
    }
    if tx.outputs.is_empty() {
        return Err(TransactionError::NoOutputs);
    }
    if tx.outputs.len() > params.max_subdivision_outputs {
        return Err(TransactionError::TooManyOutputs {
            count: tx.outputs.len(),
            max: params.max_subdivision_outputs,
        });
    }
    for output in &tx.outputs {
        if output.value.is_zero() {
            return Err(TransactionError::ZeroAmount);
        }
        if output.owner.is_empty() {
            return Err(TransactionError::Other(
                "subdivision output owner must not be empty".into(),
            ));
        }
    }
    check_signature(
        &tx.signable_message(),
        &tx.signature,
        &tx.public_key,
        tx.id().to_string(),
    )
}

/// Validate a transfer transaction: target owner and signature.
pub fn validate_transfer(tx: &TransferTx) -> Result<(), TransactionError> {
    if tx.input.is_zero() {
        return Err(TransactionError::Other(
            "transfer input identifier must not be zero".into(),
        ));
    }
    if tx.new_owner.is_empty() {
        return Err(TransactionError::Other(
            "transfer new owner must not be empty".into(),
        ));
    }
    check_signature(
        &tx.signable_message(),
        &tx.signature,
        &tx.public_key,
        tx.id().to_string(),
    )
}

fn check_signature(
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
    tx: String,
) -> Result<(), TransactionError> {
    if signature.is_zero() {
        return Err(TransactionError::NotSigned);
    }
    if !verify_signature(message, signature, public_key) {
        return Err(TransactionError::InvalidSignature { tx });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivision::SubdivisionOutput;
    use facet_crypto::{keypair_from_seed, sign_message};
    use facet_types::{OutputId, OwnerId, UnitValue};

    fn params() -> ChainParams {
        ChainParams::defaults()
    }

    fn signed_transfer() -> TransferTx {
        let kp = keypair_from_seed(&[11u8; 32]);
        let mut tx = TransferTx::new(OutputId::new([1u8; 32]), OwnerId::new("bob"), 1);
        let sig = sign_message(&tx.signable_message(), &kp.private);
        tx.sign(sig, kp.public);
        tx
    }

    #[test]
    fn coinbase_zero_reward_rejected() {
        let tx = CoinbaseTx::new(UnitValue::ZERO, OwnerId::new("miner"), 1);
        assert!(matches!(
            validate_coinbase(&tx, &params()),
            Err(TransactionError::ZeroAmount)
        ));
    }

    #[test]
    fn coinbase_reward_above_policy_rejected() {
        let over = params().max_coinbase_reward.checked_add(UnitValue::new(1)).unwrap();
        let tx = CoinbaseTx::new(over, OwnerId::new("miner"), 1);
        assert!(matches!(
            validate_coinbase(&tx, &params()),
            Err(TransactionError::RewardTooLarge { .. })
        ));
    }

    #[test]
    fn coinbase_at_policy_bound_accepted() {
        let tx = CoinbaseTx::new(params().max_coinbase_reward, OwnerId::new("miner"), 1);
        assert!(validate_coinbase(&tx, &params()).is_ok());
    }

    #[test]
    fn unsigned_transfer_rejected() {
        let tx = TransferTx::new(OutputId::new([1u8; 32]), OwnerId::new("bob"), 1);
        assert!(matches!(
            validate_transfer(&tx),
            Err(TransactionError::NotSigned)
        ));
    }

    #[test]
    fn signed_transfer_accepted() {
        assert!(validate_transfer(&signed_transfer()).is_ok());
    }

    #[test]
    fn tampered_transfer_rejected() {
        let mut tx = signed_transfer();
        tx.new_owner = OwnerId::new("mallory");
        assert!(matches!(
            validate_transfer(&tx),
            Err(TransactionError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn wrong_key_transfer_rejected() {
        let mut tx = signed_transfer();
        let other = keypair_from_seed(&[12u8; 32]);
        tx.public_key = other.public;
        assert!(matches!(
            validate_transfer(&tx),
            Err(TransactionError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn subdivision_without_outputs_rejected() {
        let tx = SubdivisionTx::new(OutputId::new([1u8; 32]), vec![], 1);
        assert!(matches!(
            validate_subdivision(&tx, &params()),
            Err(TransactionError::NoOutputs)
        ));
    }

    #[test]
    fn subdivision_zero_value_output_rejected() {
        let tx = SubdivisionTx::new(
            OutputId::new([1u8; 32]),
            vec![SubdivisionOutput {
                owner: OwnerId::new("alice"),
                value: UnitValue::ZERO,
            }],
            1,
        );
        assert!(matches!(
            validate_subdivision(&tx, &params()),
            Err(TransactionError::ZeroAmount)
        ));
    }

    #[test]
    fn subdivision_too_many_outputs_rejected() {
        let outputs = (0..=params().max_subdivision_outputs)
            .map(|i| SubdivisionOutput {
                owner: OwnerId::new(format!("owner-{i}")),
                value: UnitValue::new(1),
            })
            .collect();
        let tx = SubdivisionTx::new(OutputId::new([1u8; 32]), outputs, 1);
        assert!(matches!(
            validate_subdivision(&tx, &params()),
            Err(TransactionError::TooManyOutputs { .. })
        ));
    }

    #[test]
    fn signed_subdivision_accepted() {
        let kp = keypair_from_seed(&[13u8; 32]);
        let mut tx = SubdivisionTx::new(
            OutputId::new([1u8; 32]),
            vec![SubdivisionOutput {
                owner: OwnerId::new("alice"),
                value: UnitValue::new(5),
            }],
            1,
        );
        let sig = sign_message(&tx.signable_message(), &kp.private);
        tx.sign(sig, kp.public);
        assert!(validate_subdivision(&tx, &params()).is_ok());
    }

    #[test]
    fn dispatch_covers_all_kinds() {
        let coinbase = Transaction::Coinbase(CoinbaseTx::new(
            UnitValue::new(10),
            OwnerId::new("miner"),
            1,
        ));
        assert!(validate_transaction(&coinbase, &params()).is_ok());

        let transfer = Transaction::Transfer(signed_transfer());
        assert!(validate_transaction(&transfer, &params()).is_ok());
    }
}
