//! Property-based tests for the consolidator.
//!
//! These tests verify that:
//! - Quantity is conserved under grouping
//! - No two output lines share a grouping key
//! - Consolidation is idempotent
//! - Output is ordered by aisle name

use aisleplan_core::consolidate;
use aisleplan_types::line::ShoppingListLine;
use proptest::prelude::*;

fn arb_line() -> impl Strategy<Value = ShoppingListLine> {
    // Small id/aisle pools so that merges actually happen.
    let ids = prop::sample::select(vec!["apple", "beans", "milk", "bread", ""]);
    let aisles = prop::sample::select(vec!["Produce", "Pantry", "Dairy", "Bakery"]);
    let notes = prop::option::of(prop::sample::select(vec!["", "canned", "fresh", "diced"]));

    (ids, aisles, notes, 0.0f64..100.0).prop_map(|(id, aisle, note, qty)| ShoppingListLine {
        ingredient_id: id.to_string(),
        ingredient_name: id.to_uppercase(),
        aisle_name: aisle.to_string(),
        quantity: qty,
        note: note.map(str::to_string),
    })
}

fn arb_lines() -> impl Strategy<Value = Vec<ShoppingListLine>> {
    prop::collection::vec(arb_line(), 0..40)
}

proptest! {
    /// The output quantity total equals the input quantity total.
    #[test]
    fn quantity_is_conserved(lines in arb_lines()) {
        let out = consolidate(&lines);

        let total_in: f64 = lines.iter().map(|l| l.quantity).sum();
        let total_out: f64 = out.iter().map(|l| l.quantity).sum();

        // Summation order differs between the two totals, so allow for
        // float rounding.
        let tolerance = 1e-9 * total_in.abs().max(1.0);
        prop_assert!((total_in - total_out).abs() <= tolerance,
            "input total {} != output total {}", total_in, total_out);
    }

    /// No two output lines share `(ingredient_id, normalized note)`.
    #[test]
    fn output_keys_are_unique(lines in arb_lines()) {
        let out = consolidate(&lines);

        let mut keys: Vec<(&str, &str)> = out.iter().map(|l| l.group_key()).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(before, keys.len());
    }

    /// Consolidating already-consolidated output changes nothing.
    #[test]
    fn consolidation_is_idempotent(lines in arb_lines()) {
        let once = consolidate(&lines);
        let twice = consolidate(&once);
        prop_assert_eq!(once, twice);
    }

    /// Output is non-decreasing by aisle name.
    #[test]
    fn output_is_sorted_by_aisle(lines in arb_lines()) {
        let out = consolidate(&lines);
        prop_assert!(out.windows(2).all(|w| w[0].aisle_name <= w[1].aisle_name));
    }

    /// Every output key was present in the input, and vice versa.
    #[test]
    fn keys_are_preserved(lines in arb_lines()) {
        let out = consolidate(&lines);

        let mut keys_in: Vec<(&str, &str)> = lines.iter().map(|l| l.group_key()).collect();
        keys_in.sort();
        keys_in.dedup();

        let mut keys_out: Vec<(&str, &str)> = out.iter().map(|l| l.group_key()).collect();
        keys_out.sort();

        prop_assert_eq!(keys_in, keys_out);
    }
}
