use axum::{Extension, extract::State};
use larder_core::domain::{
    recipe::{ports::RecipeService, value_objects::SuggestRecipesInput},
    recipe_filter::value_objects::RecipePage,
};

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        recipe::validators::SuggestRecipesValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "recipe",
    summary = "Suggest recipes",
    description = "Asks the recommender for recipe titles matching the ingredients and returns the catalog recipes the caller can eat, in recommender order.",
    params(
        ("limit" = Option<usize>, Query, description = "Page size, default 50"),
        ("offset" = Option<usize>, Query, description = "Page offset, default 0"),
    ),
    request_body = SuggestRecipesValidator,
    responses(
        (status = 200, body = RecipePage),
        (status = 400, body = ApiErrorResponse, description = "Malformed request body")
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
    ValidateJson(payload): ValidateJson<SuggestRecipesValidator>,
) -> Result<Response<RecipePage>, ApiError> {
    let page = state
        .service
        .suggest_recipes(SuggestRecipesInput {
            user_id: user.user_id,
            ingredients: payload.ingredients,
            top_n: payload.top_n,
            pagination: query_params.pagination,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
