//! JSON catalog and recipe loading.
//!
//! The import format references aisles, units, and seasons by *name* so files
//! can be written by hand. Names are resolved case-insensitively after
//! trimming; stable ids are derived from the normalized names so that repeated
//! imports of the same file produce the same catalog.

use aisleplan_types::catalog::{
    Aisle, Catalog, Ingredient, Recipe, RecipeIngredient, Season, Unit,
};
use camino::Utf8Path;
use fs_err as fs;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ingredient #{index} must define '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("ingredient #{index} references unknown {kind} '{name}'")]
    UnknownLookup {
        index: usize,
        kind: &'static str,
        name: String,
    },

    #[error("recipe #{index} must have a name")]
    RecipeMissingName { index: usize },

    #[error("recipe '{recipe}' ingredient #{index} references unknown ingredient '{name}'")]
    UnknownRecipeIngredient {
        recipe: String,
        index: usize,
        name: String,
    },

    #[error("recipe '{recipe}' ingredient #{index} has non-positive quantity {quantity}")]
    NonPositiveQuantity {
        recipe: String,
        index: usize,
        quantity: f64,
    },
}

/// Everything one list build needs, loaded from a single JSON file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub catalog: Catalog,
    pub recipes: Vec<Recipe>,
}

/// Raw on-disk shapes. Lookups are by name here; ids are derived on import.
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    aisles: Vec<RawAisle>,

    #[serde(default)]
    units: Vec<RawNamed>,

    #[serde(default)]
    seasons: Vec<RawNamed>,

    #[serde(default)]
    ingredients: Vec<RawIngredient>,

    #[serde(default)]
    recipes: Vec<RawRecipe>,
}

#[derive(Debug, Deserialize)]
struct RawAisle {
    name: String,

    #[serde(default)]
    sort_order: u32,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawIngredient {
    #[serde(default)]
    name: String,

    #[serde(default)]
    aisle: String,

    #[serde(default)]
    unit: String,

    #[serde(default)]
    seasons: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRecipe {
    #[serde(default)]
    name: String,

    #[serde(default)]
    total_minutes: u32,

    #[serde(default)]
    notes: Option<String>,

    #[serde(default)]
    ingredients: Vec<RawRecipeIngredient>,
}

#[derive(Debug, Deserialize)]
struct RawRecipeIngredient {
    #[serde(default)]
    ingredient: String,

    #[serde(default)]
    quantity: f64,

    #[serde(default)]
    note: Option<String>,
}

/// Load a dataset from a JSON file on disk.
pub fn load_dataset(path: &Utf8Path) -> Result<Dataset, ImportError> {
    let payload = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_string(),
        source,
    })?;
    let dataset = parse_dataset(&payload)?;
    debug!(
        %path,
        ingredients = dataset.catalog.ingredients.len(),
        recipes = dataset.recipes.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse a dataset from a JSON string.
pub fn parse_dataset(payload: &str) -> Result<Dataset, ImportError> {
    let raw: RawDataset = serde_json::from_str(payload)?;

    let aisles: Vec<Aisle> = raw
        .aisles
        .iter()
        .map(|a| Aisle {
            id: normalize(&a.name),
            name: a.name.trim().to_string(),
            sort_order: a.sort_order,
        })
        .collect();
    let units: Vec<Unit> = raw
        .units
        .iter()
        .map(|u| Unit {
            id: normalize(&u.name),
            name: u.name.trim().to_string(),
        })
        .collect();
    let seasons: Vec<Season> = raw
        .seasons
        .iter()
        .map(|s| Season {
            id: normalize(&s.name),
            name: s.name.trim().to_string(),
        })
        .collect();

    let aisle_lookup = name_lookup(aisles.iter().map(|a| (a.name.as_str(), a.id.as_str())));
    let unit_lookup = name_lookup(units.iter().map(|u| (u.name.as_str(), u.id.as_str())));
    let season_lookup = name_lookup(seasons.iter().map(|s| (s.name.as_str(), s.id.as_str())));

    // Duplicate ingredient names upsert: the last definition wins.
    let mut ingredients: Vec<Ingredient> = Vec::new();
    let mut ingredient_slots: HashMap<String, usize> = HashMap::new();

    for (index, raw_ing) in raw.ingredients.iter().enumerate() {
        let index = index + 1;
        let name = required(&raw_ing.name, index, "name")?;
        let aisle_name = required(&raw_ing.aisle, index, "aisle")?;
        let unit_name = required(&raw_ing.unit, index, "unit")?;

        let aisle_id = resolve(&aisle_lookup, &aisle_name, index, "aisle")?;
        let unit_id = resolve(&unit_lookup, &unit_name, index, "unit")?;
        let season_ids = raw_ing
            .seasons
            .iter()
            .map(|s| resolve(&season_lookup, s, index, "season"))
            .collect::<Result<Vec<_>, _>>()?;

        let ingredient = Ingredient {
            id: normalize(&name),
            name,
            aisle_id,
            unit_id,
            season_ids,
        };

        match ingredient_slots.get(&ingredient.id) {
            Some(&slot) => ingredients[slot] = ingredient,
            None => {
                ingredient_slots.insert(ingredient.id.clone(), ingredients.len());
                ingredients.push(ingredient);
            }
        }
    }

    let ingredient_lookup = name_lookup(
        ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.id.as_str())),
    );

    let mut recipes: Vec<Recipe> = Vec::new();
    for (index, raw_recipe) in raw.recipes.iter().enumerate() {
        let index = index + 1;
        let name = raw_recipe.name.trim();
        if name.is_empty() {
            return Err(ImportError::RecipeMissingName { index });
        }

        let mut rows = Vec::new();
        for (row_index, raw_row) in raw_recipe.ingredients.iter().enumerate() {
            let row_index = row_index + 1;
            let key = normalize(&raw_row.ingredient);
            let ingredient_id = ingredient_lookup.get(&key).cloned().ok_or_else(|| {
                ImportError::UnknownRecipeIngredient {
                    recipe: name.to_string(),
                    index: row_index,
                    name: raw_row.ingredient.trim().to_string(),
                }
            })?;

            if raw_row.quantity <= 0.0 {
                return Err(ImportError::NonPositiveQuantity {
                    recipe: name.to_string(),
                    index: row_index,
                    quantity: raw_row.quantity,
                });
            }

            rows.push(RecipeIngredient {
                ingredient_id,
                quantity: raw_row.quantity,
                note: raw_row
                    .note
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            });
        }

        recipes.push(Recipe {
            id: normalize(name),
            name: name.to_string(),
            total_minutes: raw_recipe.total_minutes,
            notes: raw_recipe
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            ingredients: rows,
        });
    }

    Ok(Dataset {
        catalog: Catalog {
            aisles,
            units,
            seasons,
            ingredients,
        },
        recipes,
    })
}

fn required(value: &str, index: usize, field: &'static str) -> Result<String, ImportError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ImportError::MissingField { index, field });
    }
    Ok(trimmed.to_string())
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn name_lookup<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> HashMap<String, String> {
    pairs
        .map(|(name, id)| (normalize(name), id.to_string()))
        .collect()
}

fn resolve(
    lookup: &HashMap<String, String>,
    value: &str,
    index: usize,
    kind: &'static str,
) -> Result<String, ImportError> {
    lookup
        .get(&normalize(value))
        .cloned()
        .ok_or_else(|| ImportError::UnknownLookup {
            index,
            kind,
            name: value.trim().to_string(),
        })
}
