use axum::{Extension, extract::State};
use larder_core::domain::{
    recipe::{ports::RecipeService, value_objects::MatchingRecipesInput},
    recipe_filter::value_objects::RecipePage,
};

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[utoipa::path(
    get,
    path = "/matching",
    tag = "recipe",
    summary = "Recipes I can cook",
    description = "Recipes whose every ingredient is available in the caller's stock, after diet and allergen filtering.",
    params(
        ("limit" = Option<usize>, Query, description = "Page size, default 50"),
        ("offset" = Option<usize>, Query, description = "Page offset, default 0"),
    ),
    responses(
        (status = 200, body = RecipePage),
        (status = 401, description = "Missing or malformed X-User-Id")
    )
)]
pub async fn matching_recipes(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<RecipePage>, ApiError> {
    let page = state
        .service
        .matching_recipes(MatchingRecipesInput {
            user_id: user.user_id,
            pagination: query_params.pagination,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
