use crate::line::ShoppingListLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A consolidated shopping list as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Schema identifier, e.g. "aisleplan.list.v1".
    pub schema: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub lines: Vec<ShoppingListLine>,

    pub summary: ListSummary,
}

impl ShoppingList {
    /// Wrap already-consolidated lines into a schema-tagged document.
    pub fn new(lines: Vec<ShoppingListLine>, generated_at: Option<DateTime<Utc>>) -> Self {
        let summary = ListSummary::from_lines(&lines);
        Self {
            schema: crate::schema::AISLEPLAN_LIST_V1.to_string(),
            generated_at,
            lines,
            summary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub lines_total: u64,
    pub aisles_total: u64,
    pub quantity_total: f64,
}

impl ListSummary {
    pub fn from_lines(lines: &[ShoppingListLine]) -> Self {
        let aisles = lines
            .iter()
            .map(|l| l.aisle_name.as_str())
            .collect::<BTreeSet<_>>();
        Self {
            lines_total: lines.len() as u64,
            aisles_total: aisles.len() as u64,
            quantity_total: lines.iter().map(|l| l.quantity).sum(),
        }
    }
}

/// One contiguous run of same-aisle lines in an already-sorted list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AisleSection {
    pub aisle_name: String,
    pub lines: Vec<ShoppingListLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(id: &str, aisle: &str, qty: f64) -> ShoppingListLine {
        ShoppingListLine {
            ingredient_id: id.to_string(),
            ingredient_name: id.to_uppercase(),
            aisle_name: aisle.to_string(),
            quantity: qty,
            note: None,
        }
    }

    #[test]
    fn summary_counts_lines_aisles_and_quantity() {
        let lines = vec![
            line("a", "Produce", 1.5),
            line("b", "Produce", 2.0),
            line("c", "Dairy", 0.5),
        ];
        let summary = ListSummary::from_lines(&lines);
        assert_eq!(
            summary,
            ListSummary {
                lines_total: 3,
                aisles_total: 2,
                quantity_total: 4.0,
            }
        );
    }

    #[test]
    fn list_document_carries_schema_tag() {
        let list = ShoppingList::new(vec![line("a", "Produce", 1.0)], None);
        assert_eq!(list.schema, crate::schema::AISLEPLAN_LIST_V1);
        assert_eq!(list.summary.lines_total, 1);

        let value = serde_json::to_value(&list).expect("serialize list");
        assert_eq!(value["schema"], serde_json::json!("aisleplan.list.v1"));
        // generated_at is omitted when absent.
        assert!(value.get("generated_at").is_none());
    }
}
