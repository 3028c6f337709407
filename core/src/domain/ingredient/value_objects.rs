use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ingredient::entities::Ingredient;

pub const DEFAULT_INGREDIENT_SEARCH_LIMIT: u32 = 20;
pub const MAX_INGREDIENT_SEARCH_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct SearchIngredientsInput {
    pub user_id: Uuid,
    pub query: String,
    pub limit: Option<u32>,
}

/// Catalog hit annotated against the caller's dietary profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMatch {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub is_safe: bool,
    pub diet_compatible: bool,
}
