use axum::{Extension, extract::State};
use larder_core::domain::{
    recipe::{ports::RecipeService, value_objects::ListRecipesInput},
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
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Lists catalog recipes the caller can safely eat, optionally filtered by name and diet.",
    params(
        ("filter[name]" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("filter[diet]" = Option<String>, Query, description = "Diet to apply instead of the profile diet"),
        ("limit" = Option<usize>, Query, description = "Page size, default 50"),
        ("offset" = Option<usize>, Query, description = "Page offset, default 0"),
    ),
    responses(
        (status = 200, body = RecipePage),
        (status = 401, description = "Missing or malformed X-User-Id")
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<RecipePage>, ApiError> {
    let page = state
        .service
        .list_recipes(ListRecipesInput {
            user_id: user.user_id,
            name_contains: query_params.filter.get("name"),
            diet: query_params.filter.get("diet"),
            pagination: query_params.pagination,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
