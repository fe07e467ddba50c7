#![no_main]

use libfuzzer_sys::fuzz_target;

use unitconv_core::{convert, Category, StandardRegistry, UnitRegistry};

fuzz_target!(|data: &[u8]| {
    if data.len() < 11 {
        return;
    }
    let value = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    // Arbitrary strings must be rejected or converted, never panic
    let text = String::from_utf8_lossy(&data[8..]);
    let mut parts = text.splitn(3, '\0');
    let category = parts.next().unwrap_or_default();
    let from = parts.next().unwrap_or_default();
    let to = parts.next().unwrap_or_default();
    let _ = convert(value, from, to, category);

    // Known units: identity is exact for finite input
    let registry = StandardRegistry::new();
    let category = Category::ALL[usize::from(data[8]) % Category::ALL.len()];
    let units = registry.units(category);
    let from = units[usize::from(data[9]) % units.len()];
    let to = units[usize::from(data[10]) % units.len()];

    convert(value, from, to, category.name()).expect("known units must convert");
    if value.is_finite() {
        let same = convert(value, from, from, category.name()).expect("identity");
        assert_eq!(same, value, "identity changed {value} {from} in {category}");
    }
});
