//! Transfer transaction: re-key one unit to a new owner.

use facet_crypto::{blake2b_256, derive_transfer_output};
use facet_types::{OutputId, OwnerId, PublicKey, Signature};
use serde::{Deserialize, Serialize};

/// A transfer transaction.
///
/// Consumes the `input` entry and mints exactly one output under
/// `derive_transfer_output(input, new_owner)`, carrying the same value
/// re-owned to `new_owner`. Must be signed by the key that owns the
/// input unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferTx {
    pub input: OutputId,
    pub new_owner: OwnerId,
    pub public_key: PublicKey,
    pub signature: Signature,
    pub nonce: u64,
}

impl TransferTx {
    /// Build an unsigned transfer. Call [`sign`](Self::sign) before
    /// submitting it anywhere; unsigned transactions never validate.
    pub fn new(input: OutputId, new_owner: OwnerId, nonce: u64) -> Self {
        Self {
            input,
            new_owner,
            public_key: PublicKey([0u8; 32]),
            signature: Signature::ZERO,
            nonce,
        }
    }

    /// Canonical transaction identifier (signature excluded).
    pub fn id(&self) -> OutputId {
        OutputId::new(blake2b_256(&self.signable_message()))
    }

    /// The bytes a spender signs: kind tag, input, new owner, nonce.
    pub fn signable_message(&self) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice(b"transfer");
        message.extend_from_slice(self.input.as_bytes());
        message.extend_from_slice(self.new_owner.as_str().as_bytes());
        message.extend_from_slice(&self.nonce.to_be_bytes());
        message
    }

    /// Attach the authorizing signature and the key that produced it.
    pub fn sign(&mut self, signature: Signature, public_key: PublicKey) {
        self.signature = signature;
        self.public_key = public_key;
    }

    /// The identifier the re-keyed output will live under once applied.
    pub fn output_id(&self) -> OutputId {
        derive_transfer_output(&self.input, &self.new_owner)
    }
}
