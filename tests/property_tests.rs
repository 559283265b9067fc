//! Property-based tests for named_color_consts.
//!
//! These tests verify properties of name and colour normalisation that
//! should hold for every input, not only the entries in the real tables.

use proptest::prelude::*;

use named_color_consts::color::{ColorTriplet, RawColor, normalize_color, to_hex};
use named_color_consts::generator::generate;
use named_color_consts::name::{is_valid_identifier, normalize_name};
use named_color_consts::tables::ColorTables;

// ============================================================================
// Custom Strategies
// ============================================================================

/// Generate a valid RGB color triplet.
fn rgb_triplet() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

/// Names shaped like matplotlib's table keys.
fn table_name() -> impl Strategy<Value = String> {
    "[a-z][a-z '/:]{0,24}"
}

/// A CSS4-style table built from generated names and colours.
fn css4_tables() -> impl Strategy<Value = ColorTables> {
    prop::collection::vec((table_name(), rgb_triplet()), 0..24).prop_map(|entries| {
        let mut tables = ColorTables::new();
        for (name, (r, g, b)) in entries {
            tables.css4.push(name, RawColor::hex(to_hex((r, g, b))));
        }
        tables
    })
}

// ============================================================================
// Colour Properties
// ============================================================================

proptest! {
    #[test]
    fn hex_round_trips_in_either_case((r, g, b) in rgb_triplet(), lower in any::<bool>()) {
        let hex = to_hex((r, g, b));
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));

        let input = if lower { hex.to_ascii_lowercase() } else { hex.clone() };
        let parsed = normalize_color(&RawColor::hex(input)).expect("valid hex");
        prop_assert_eq!(parsed, ColorTriplet::new(r, g, b));
        prop_assert_eq!(parsed.hex(), hex);
    }

    #[test]
    fn byte_tuples_map_directly((r, g, b) in rgb_triplet()) {
        let raw = RawColor::byte(f64::from(r), f64::from(g), f64::from(b));
        prop_assert_eq!(normalize_color(&raw), Ok(ColorTriplet::new(r, g, b)));
    }

    #[test]
    fn unit_tuples_stay_in_byte_range(r in 0.0f64..=1.0, g in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let triplet = normalize_color(&RawColor::unit(r, g, b)).expect("unit tuple");
        let (fr, fg, fb) = triplet.normalized();
        prop_assert!((0.0..=1.0).contains(&fr));
        prop_assert!((0.0..=1.0).contains(&fg));
        prop_assert!((0.0..=1.0).contains(&fb));
    }

    #[test]
    fn float_tuple_uses_two_decimals((r, g, b) in rgb_triplet()) {
        let rendered = ColorTriplet::new(r, g, b).float_tuple();
        let inner = rendered.trim_start_matches('(').trim_end_matches(')');
        for part in inner.split(", ") {
            let decimals = part.split_once('.').map_or(0, |(_, d)| d.len());
            prop_assert!(decimals >= 1 && decimals <= 2, "{part} in {rendered}");
        }
    }
}

// ============================================================================
// Name Properties
// ============================================================================

proptest! {
    #[test]
    fn normalize_name_is_idempotent(name in table_name()) {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn normalized_table_names_are_identifiers(name in table_name()) {
        let normalized = normalize_name(&name);
        prop_assert!(is_valid_identifier(&normalized), "{name} -> {normalized}");
        prop_assert!(!normalized.chars().any(|c| matches!(c, ' ' | ':' | '\'' | '/')));
    }
}

// ============================================================================
// Generation Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(tables in css4_tables()) {
        let first = generate(&tables).expect("generate");
        let second = generate(&tables).expect("generate");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_block_per_emitted_entry(tables in css4_tables()) {
        let generated = generate(&tables).expect("generate");
        prop_assert_eq!(generated.emitted + generated.skipped.len(), tables.total());
        prop_assert_eq!(
            generated.text.matches("/// ## Representations:").count(),
            generated.emitted
        );
        prop_assert_eq!(generated.text.matches("pub const ").count(), generated.emitted);
    }
}
