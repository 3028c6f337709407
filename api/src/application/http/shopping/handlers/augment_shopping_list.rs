use axum::{Extension, extract::State};
use larder_core::domain::shopping::{
    ports::ShoppingService,
    value_objects::{AugmentShoppingListInput, ShoppingListAugmentation},
};

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping::validators::AugmentShoppingListValidator,
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    post,
    path = "/augment",
    tag = "shopping",
    summary = "Add recipe ingredients to the shopping list",
    description = "Ingredients the selected recipes need that are not in the caller's stock, each flagged for the caller's allergies.",
    request_body = AugmentShoppingListValidator,
    responses(
        (status = 200, body = ShoppingListAugmentation),
        (status = 400, body = ApiErrorResponse, description = "Malformed request body"),
        (status = 404, body = ApiErrorResponse, description = "Unknown recipe id")
    )
)]
pub async fn augment_shopping_list(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    ValidateJson(payload): ValidateJson<AugmentShoppingListValidator>,
) -> Result<Response<ShoppingListAugmentation>, ApiError> {
    let list = state
        .service
        .augment_shopping_list(AugmentShoppingListInput {
            user_id: user.user_id,
            recipe_ids: payload.recipe_ids,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(list))
}
