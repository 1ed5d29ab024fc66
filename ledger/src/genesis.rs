//! Genesis bootstrap: the first unspent entry on a fresh chain.

use crate::utxo::UtxoSet;
use facet_crypto::blake2b_256_multi;
use facet_types::{AssetUnit, ChainParams, OutputId, OwnerId, UnitValue};

/// Build the deterministic genesis entry: the whole `genesis_supply` under a
/// single identifier owned by `owner`.
///
/// Pass a key-derived owner if the supply is meant to be spendable; a plain
/// label parks it forever.
pub fn genesis_entry(params: &ChainParams, owner: &OwnerId) -> (OutputId, AssetUnit) {
    let id = genesis_output_id(params.genesis_supply, owner);
    (id, AssetUnit::new(params.genesis_supply, owner.clone()))
}

/// A fresh state holding only the genesis entry.
pub fn genesis_state(params: &ChainParams, owner: &OwnerId) -> UtxoSet {
    [genesis_entry(params, owner)].into_iter().collect()
}

fn genesis_output_id(supply: UnitValue, owner: &OwnerId) -> OutputId {
    let hash = blake2b_256_multi(&[
        b"facet-genesis",
        owner.as_str().as_bytes(),
        &supply.raw().to_be_bytes(),
    ]);
    OutputId::new(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_is_deterministic() {
        let params = ChainParams::defaults();
        let owner = OwnerId::new("bootstrap");
        assert_eq!(genesis_entry(&params, &owner), genesis_entry(&params, &owner));
    }

    #[test]
    fn genesis_state_holds_full_supply() {
        let params = ChainParams::defaults();
        let state = genesis_state(&params, &OwnerId::new("bootstrap"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.total_value(), params.genesis_supply);
    }

    #[test]
    fn different_owners_different_ids() {
        let params = ChainParams::defaults();
        let (a, _) = genesis_entry(&params, &OwnerId::new("one"));
        let (b, _) = genesis_entry(&params, &OwnerId::new("two"));
        assert_ne!(a, b);
    }
}
