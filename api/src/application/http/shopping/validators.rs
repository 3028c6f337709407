use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AugmentShoppingListValidator {
    #[validate(length(min = 1, message = "recipe_ids must not be empty"))]
    pub recipe_ids: Vec<Uuid>,
}
