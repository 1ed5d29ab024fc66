//! Owner-tag derivation from public keys.

use crate::hash::blake2b_256;
use facet_types::{OwnerId, PublicKey};

/// Derive the owner tag controlled by a public key.
///
/// `fct_` + lowercase hex of Blake2b-256(public key bytes). A unit whose
/// owner equals this tag can only be spent by a transaction signed with the
/// matching private key.
pub fn derive_owner(public_key: &PublicKey) -> OwnerId {
    let digest = blake2b_256(public_key.as_bytes());
    let mut tag = String::with_capacity(OwnerId::PREFIX.len() + 64);
    tag.push_str(OwnerId::PREFIX);
    for byte in digest {
        tag.push_str(&format!("{:02x}", byte));
    }
    OwnerId::new(tag)
}
