//! Subdivision transaction: split one unit into several smaller ones.

use facet_crypto::{blake2b_256, derive_subdivision_output};
use facet_types::{OutputId, OwnerId, PublicKey, Signature, UnitValue};
use serde::{Deserialize, Serialize};

/// One minted output of a subdivision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdivisionOutput {
    pub owner: OwnerId,
    pub value: UnitValue,
}

/// A subdivision transaction.
///
/// Consumes the `parent` entry and mints one output per element of
/// `outputs`. The output values must sum exactly to the parent's value
/// (checked statefully by the ledger). Must be signed by the key that owns
/// the parent unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubdivisionTx {
    pub parent: OutputId,
    pub outputs: Vec<SubdivisionOutput>,
    pub public_key: PublicKey,
    pub signature: Signature,
    pub nonce: u64,
}

impl SubdivisionTx {
    /// Build an unsigned subdivision. Call [`sign`](Self::sign) before
    /// submitting it anywhere; unsigned transactions never validate.
    pub fn new(parent: OutputId, outputs: Vec<SubdivisionOutput>, nonce: u64) -> Self {
        Self {
            parent,
            outputs,
            public_key: PublicKey([0u8; 32]),
            signature: Signature::ZERO,
            nonce,
        }
    }

    /// Canonical transaction identifier (signature excluded).
    pub fn id(&self) -> OutputId {
        OutputId::new(blake2b_256(&self.signable_message()))
    }

    /// The bytes a spender signs: kind tag, parent, every output, nonce.
    pub fn signable_message(&self) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice(b"subdivision");
        message.extend_from_slice(self.parent.as_bytes());
        for output in &self.outputs {
            message.extend_from_slice(output.owner.as_str().as_bytes());
            message.extend_from_slice(&output.value.raw().to_be_bytes());
        }
        message.extend_from_slice(&self.nonce.to_be_bytes());
        message
    }

    /// Attach the authorizing signature and the key that produced it.
    pub fn sign(&mut self, signature: Signature, public_key: PublicKey) {
        self.signature = signature;
        self.public_key = public_key;
    }

    /// The identifier the `index`-th output will live under once applied.
    pub fn output_id(&self, index: usize) -> OutputId {
        derive_subdivision_output(&self.parent, index as u32, &self.outputs[index].owner)
    }
}
