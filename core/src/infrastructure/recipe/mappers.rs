use sea_orm::{DbErr, QueryResult};
use uuid::Uuid;

use crate::domain::recipe::entities::Recipe;

/// Builds a recipe from a row carrying `id`, `name`, `description` and the
/// `ingredients`, `allergens` and `diets` arrays.
pub fn recipe_from_row(row: &QueryResult) -> Result<Recipe, DbErr> {
    let id: Uuid = row.try_get("", "id")?;
    let name: String = row.try_get("", "name")?;
    let description: Option<String> = row.try_get("", "description")?;
    let ingredients: Vec<String> = row.try_get("", "ingredients")?;
    let allergens: Vec<String> = row.try_get("", "allergens")?;
    let diets: Vec<String> = row.try_get("", "diets")?;

    let mut recipe = Recipe::new(id, &name, ingredients)
        .with_allergens(allergens)
        .with_diets(diets);
    recipe.description = description;

    Ok(recipe)
}
