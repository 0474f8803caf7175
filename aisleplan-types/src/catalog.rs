//! Catalog and recipe entities.
//!
//! aisleplan tries to be *tolerant* when reading these from disk:
//! - Unknown fields are ignored.
//! - Optional fields may be absent.
//!
//! Whatever produced the files should enforce stricter schema compliance;
//! aisleplan's job is to be useful with data "as found".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A physical store section. `sort_order` drives catalog listings; the
/// consolidator itself orders output by aisle *name*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aisle {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub sort_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,

    /// The ingredient's currently assigned aisle. Lists are always built from
    /// this live assignment, never a historical snapshot.
    pub aisle_id: String,

    pub unit_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub season_ids: Vec<String>,
}

/// One ingredient row inside a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: String,
    pub quantity: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub total_minutes: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// The id-indexed ingredient catalog a list build runs against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub aisles: Vec<Aisle>,

    #[serde(default)]
    pub units: Vec<Unit>,

    #[serde(default)]
    pub seasons: Vec<Season>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Catalog {
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn aisle(&self, id: &str) -> Option<&Aisle> {
        self.aisles.iter().find(|a| a.id == id)
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Aisles in store-walk order (`sort_order`, then name for stability).
    pub fn aisles_in_walk_order(&self) -> Vec<&Aisle> {
        let mut aisles: Vec<&Aisle> = self.aisles.iter().collect();
        aisles.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        aisles
    }
}

/// Recipe ids (with per-recipe multiplier) chosen for one list build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub entries: Vec<SelectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub recipe_id: String,

    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

impl Selection {
    pub fn single(recipe_id: impl Into<String>) -> Self {
        Self {
            entries: vec![SelectionEntry {
                recipe_id: recipe_id.into(),
                multiplier: 1.0,
            }],
        }
    }
}

/// Index recipes by id for resolver lookups.
pub fn recipe_index(recipes: &[Recipe]) -> HashMap<&str, &Recipe> {
    recipes.iter().map(|r| (r.id.as_str(), r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aisles_walk_order_uses_sort_order_then_name() {
        let catalog = Catalog {
            aisles: vec![
                Aisle {
                    id: "z".to_string(),
                    name: "Pantry".to_string(),
                    sort_order: 2,
                },
                Aisle {
                    id: "a".to_string(),
                    name: "Produce".to_string(),
                    sort_order: 1,
                },
                Aisle {
                    id: "b".to_string(),
                    name: "Bakery".to_string(),
                    sort_order: 2,
                },
            ],
            ..Default::default()
        };

        let names: Vec<&str> = catalog
            .aisles_in_walk_order()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Produce", "Bakery", "Pantry"]);
    }

    #[test]
    fn selection_entry_multiplier_defaults_to_one() {
        let entry: SelectionEntry =
            serde_json::from_str(r#"{ "recipe_id": "r1" }"#).expect("parse entry");
        assert_eq!(entry.multiplier, 1.0);
    }

    #[test]
    fn catalog_tolerates_missing_sections() {
        let catalog: Catalog = serde_json::from_str(r#"{ "aisles": [] }"#).expect("parse catalog");
        assert!(catalog.ingredients.is_empty());
        assert!(catalog.units.is_empty());
    }
}
