use aisleplan_types::line::ShoppingListLine;
use aisleplan_types::list::AisleSection;

/// Partition an already-consolidated, already-sorted list into contiguous
/// per-aisle runs, preserving order.
///
/// Quantities are pre-summed by [`consolidate`](crate::consolidate); consumers
/// must not re-sum them.
pub fn group_by_aisle(lines: &[ShoppingListLine]) -> Vec<AisleSection> {
    let mut sections: Vec<AisleSection> = Vec::new();

    for line in lines {
        match sections.last_mut() {
            Some(section) if section.aisle_name == line.aisle_name => {
                section.lines.push(line.clone());
            }
            _ => sections.push(AisleSection {
                aisle_name: line.aisle_name.clone(),
                lines: vec![line.clone()],
            }),
        }
    }

    sections
}
