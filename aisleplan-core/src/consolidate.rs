use aisleplan_types::line::ShoppingListLine;
use std::collections::HashMap;
use tracing::debug;

/// Merge same-key lines and order the result for an in-store walk.
///
/// The identity key is `(ingredient_id, normalized note)`, where an absent
/// note and an empty note are the same "no note" value. Equal-key lines
/// collapse into one output line whose quantity is the arithmetic sum of the
/// merged quantities; every other field keeps the first-seen value.
///
/// Output is sorted ascending by `aisle_name` (lexicographic). The sort is
/// stable: lines in the same aisle keep the order in which their keys were
/// first encountered.
///
/// Total over any input: empty in means empty out, zero and negative
/// quantities pass through and merge arithmetically, and an empty
/// `ingredient_id` is a valid grouping key of its own (all such no-id lines
/// collapse per note value rather than failing).
///
/// When merged lines disagree on name or aisle the first-seen value silently
/// wins. That masks upstream data-quality problems, so the mismatch is
/// surfaced at debug level but never an error.
pub fn consolidate(lines: &[ShoppingListLine]) -> Vec<ShoppingListLine> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut out: Vec<ShoppingListLine> = Vec::new();

    for line in lines {
        let key = (
            line.ingredient_id.clone(),
            line.normalized_note().to_string(),
        );
        match index.get(&key) {
            Some(&i) => {
                let existing = &mut out[i];
                if existing.ingredient_name != line.ingredient_name
                    || existing.aisle_name != line.aisle_name
                {
                    debug!(
                        ingredient_id = %line.ingredient_id,
                        kept_name = %existing.ingredient_name,
                        kept_aisle = %existing.aisle_name,
                        dropped_name = %line.ingredient_name,
                        dropped_aisle = %line.aisle_name,
                        "merged lines disagree on non-key fields; keeping first-seen"
                    );
                }
                existing.quantity += line.quantity;
            }
            None => {
                index.insert(key, out.len());
                out.push(line.clone());
            }
        }
    }

    // Vec::sort_by is stable, so aisle ties keep first-encountered order.
    out.sort_by(|a, b| a.aisle_name.cmp(&b.aisle_name));
    out
}
