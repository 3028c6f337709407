use sea_orm::{DbErr, QueryResult};
use uuid::Uuid;

use crate::domain::ingredient::entities::Ingredient;

pub fn ingredient_from_row(row: &QueryResult) -> Result<Ingredient, DbErr> {
    let id: Uuid = row.try_get("", "id")?;
    let name: String = row.try_get("", "name")?;
    let allergens: Vec<String> = row.try_get("", "allergens")?;
    let diets: Vec<String> = row.try_get("", "diets")?;

    Ok(Ingredient::new(id, &name)
        .with_allergens(allergens)
        .with_diets(diets))
}
