//! Unit values and the asset unit held by each ledger entry.
//!
//! Values are fixed-point integers (u128) to avoid floating-point errors.
//! The smallest unit is 1 raw.

use crate::owner::OwnerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// The quantity carried by an asset unit.
///
/// Internally stored as raw units (u128) for precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitValue(u128);

impl UnitValue {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for UnitValue {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for UnitValue {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

/// The value object an unspent entry holds.
///
/// Immutable once created; moved between entries, never shared-mutated.
/// Re-owning a unit (Transfer) produces a new `AssetUnit` under a new
/// identifier rather than mutating this one in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUnit {
    pub value: UnitValue,
    pub owner: OwnerId,
}

impl AssetUnit {
    pub fn new(value: UnitValue, owner: OwnerId) -> Self {
        Self { value, owner }
    }

    /// The same value under a different owner.
    pub fn reowned(&self, owner: OwnerId) -> Self {
        Self {
            value: self.value,
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_overflow() {
        let max = UnitValue::new(u128::MAX);
        assert!(max.checked_add(UnitValue::new(1)).is_none());
        assert_eq!(
            UnitValue::new(2).checked_add(UnitValue::new(3)),
            Some(UnitValue::new(5))
        );
    }

    #[test]
    fn checked_sub_underflow() {
        assert!(UnitValue::new(1).checked_sub(UnitValue::new(2)).is_none());
        assert_eq!(
            UnitValue::new(1).saturating_sub(UnitValue::new(2)),
            UnitValue::ZERO
        );
    }

    #[test]
    fn reowned_keeps_value() {
        let unit = AssetUnit::new(UnitValue::new(10), OwnerId::new("alice"));
        let moved = unit.reowned(OwnerId::new("bob"));
        assert_eq!(moved.value, unit.value);
        assert_eq!(moved.owner, OwnerId::new("bob"));
    }
}
