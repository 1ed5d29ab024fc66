//! The unspent-output set, the authoritative ledger state.

use crate::error::ChainError;
use facet_types::{AssetUnit, OutputId, UnitValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from identifier to asset unit.
///
/// Every key present represents exactly one unspent, spendable unit. Removal
/// means the unit is spent; the same key is never reintroduced, because
/// identifiers are content-derived and derivation never repeats a consumed
/// lineage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UtxoSet {
    entries: HashMap<OutputId, AssetUnit>,
}

impl UtxoSet {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn contains(&self, id: &OutputId) -> bool {
        self.entries.contains_key(id)
    }

    /// Look up an unspent unit.
    ///
    /// Misses are `NotFound`: callers that need a recoverable error must
    /// convert it before surfacing (the validator does), and callers that
    /// have already established presence may `?` it straight through.
    pub fn get(&self, id: &OutputId) -> Result<&AssetUnit, ChainError> {
        self.entries.get(id).ok_or(ChainError::NotFound(*id))
    }

    /// Spend an entry, returning its unit.
    ///
    /// Absence here is fatal: by apply time validation has guaranteed
    /// presence, so a miss means the validate/apply contract is broken and
    /// the state is corrupt.
    pub fn remove(&mut self, id: &OutputId) -> Result<AssetUnit, ChainError> {
        self.entries.remove(id).ok_or_else(|| {
            ChainError::InvariantViolation(format!("removed output {id} missing from UTXO set"))
        })
    }

    /// Add a new entry. An already-present identifier is a collision and is
    /// never silently overwritten.
    pub fn insert(&mut self, id: OutputId, unit: AssetUnit) -> Result<(), ChainError> {
        if self.entries.contains_key(&id) {
            return Err(ChainError::InvariantViolation(format!(
                "identifier collision on insert of output {id}"
            )));
        }
        self.entries.insert(id, unit);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OutputId, &AssetUnit)> {
        self.entries.iter()
    }

    /// Sum of all unspent values. Saturates at `u128::MAX`; genesis supply
    /// and reward bounds keep real states far below that.
    pub fn total_value(&self) -> UnitValue {
        self.entries.values().fold(UnitValue::ZERO, |acc, unit| {
            UnitValue::new(acc.raw().saturating_add(unit.value.raw()))
        })
    }
}

impl FromIterator<(OutputId, AssetUnit)> for UtxoSet {
    fn from_iter<I: IntoIterator<Item = (OutputId, AssetUnit)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
