use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AugmentShoppingListInput {
    pub user_id: Uuid,
    pub recipe_ids: Vec<Uuid>,
}

/// An ingredient missing from the user's stock for at least one selected recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItem {
    pub ingredient_name: String,
    /// Selected recipes that require this ingredient.
    pub needed_by: Vec<Uuid>,
    pub is_safe: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListAugmentation {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingListAugmentation {
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.ingredient_name.as_str())
            .collect()
    }
}
