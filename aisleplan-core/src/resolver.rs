use aisleplan_types::catalog::{recipe_index, Catalog, Recipe, Selection};
use aisleplan_types::line::ShoppingListLine;
use thiserror::Error;
use tracing::debug;

/// A selection referenced data the catalog or recipe set does not have.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown recipe id '{0}'")]
    UnknownRecipe(String),

    #[error("recipe '{recipe}' references unknown ingredient id '{ingredient_id}'")]
    UnknownIngredient {
        recipe: String,
        ingredient_id: String,
    },

    #[error("ingredient '{ingredient}' references unknown aisle id '{aisle_id}'")]
    UnknownAisle { ingredient: String, aisle_id: String },
}

/// Expand selected recipes into one [`ShoppingListLine`] per ingredient
/// occurrence, ready for [`consolidate`](crate::consolidate).
///
/// Aisle names come from the ingredient's currently assigned aisle at
/// resolution time, not a snapshot. Quantities are scaled by the selection
/// entry's multiplier.
pub fn resolve_selection(
    catalog: &Catalog,
    recipes: &[Recipe],
    selection: &Selection,
) -> Result<Vec<ShoppingListLine>, ResolveError> {
    let by_id = recipe_index(recipes);
    let mut lines = Vec::new();

    for entry in &selection.entries {
        let recipe = by_id
            .get(entry.recipe_id.as_str())
            .ok_or_else(|| ResolveError::UnknownRecipe(entry.recipe_id.clone()))?;

        for row in &recipe.ingredients {
            let ingredient = catalog.ingredient(&row.ingredient_id).ok_or_else(|| {
                ResolveError::UnknownIngredient {
                    recipe: recipe.name.clone(),
                    ingredient_id: row.ingredient_id.clone(),
                }
            })?;
            let aisle =
                catalog
                    .aisle(&ingredient.aisle_id)
                    .ok_or_else(|| ResolveError::UnknownAisle {
                        ingredient: ingredient.name.clone(),
                        aisle_id: ingredient.aisle_id.clone(),
                    })?;

            lines.push(ShoppingListLine {
                ingredient_id: ingredient.id.clone(),
                ingredient_name: ingredient.name.clone(),
                aisle_name: aisle.name.clone(),
                quantity: row.quantity * entry.multiplier,
                note: row.note.clone(),
            });
        }
    }

    debug!(
        recipes = selection.entries.len(),
        lines = lines.len(),
        "resolved selection"
    );
    Ok(lines)
}
