use proptest::prelude::*;

use facet_types::{AssetUnit, OutputId, OwnerId, UnitValue};

proptest! {
    /// OutputId roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn output_id_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = OutputId::new(bytes);
        prop_assert_eq!(id.as_bytes(), &bytes);
    }

    /// OutputId::is_zero is true only for all-zero bytes.
    #[test]
    fn output_id_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let id = OutputId::new(bytes);
        prop_assert_eq!(id.is_zero(), bytes == [0u8; 32]);
    }

    /// OutputId bincode serialization roundtrip.
    #[test]
    fn output_id_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = OutputId::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: OutputId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// Display is lowercase hex of the full 32 bytes.
    #[test]
    fn output_id_display_hex(bytes in prop::array::uniform32(0u8..)) {
        let id = OutputId::new(bytes);
        let text = id.to_string();
        prop_assert_eq!(text.len(), 64);
        prop_assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// UnitValue checked_add agrees with u128 checked_add.
    #[test]
    fn unit_value_checked_add(a in any::<u128>(), b in any::<u128>()) {
        let sum = UnitValue::new(a).checked_add(UnitValue::new(b));
        prop_assert_eq!(sum.map(|v| v.raw()), a.checked_add(b));
    }

    /// UnitValue ordering matches raw ordering.
    #[test]
    fn unit_value_ordering(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(UnitValue::new(a) <= UnitValue::new(b), a <= b);
    }

    /// AssetUnit bincode serialization roundtrip.
    #[test]
    fn asset_unit_bincode_roundtrip(value in any::<u128>(), owner in "[a-z0-9_]{1,40}") {
        let unit = AssetUnit::new(UnitValue::new(value), OwnerId::new(owner));
        let encoded = bincode::serialize(&unit).unwrap();
        let decoded: AssetUnit = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, unit);
    }

    /// Reowning never changes the carried value.
    #[test]
    fn reowned_preserves_value(value in any::<u128>(), owner in "[a-z0-9_]{1,40}") {
        let unit = AssetUnit::new(UnitValue::new(value), OwnerId::new("origin"));
        let moved = unit.reowned(OwnerId::new(owner));
        prop_assert_eq!(moved.value, unit.value);
    }
}
