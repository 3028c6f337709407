use axum::{Extension, extract::State};
use larder_core::domain::{
    recipe::{ports::RecipeService, value_objects::SearchRecipesInput},
    recipe_filter::value_objects::RecipePage,
};

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        recipe::validators::SearchRecipesValidator,
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
    path = "/search",
    tag = "recipe",
    summary = "Search recipes by ingredients",
    description = "Recipes containing every requested ingredient. Allergens the caller explicitly searched for are not filtered out.",
    params(
        ("limit" = Option<usize>, Query, description = "Page size, default 50"),
        ("offset" = Option<usize>, Query, description = "Page offset, default 0"),
    ),
    request_body = SearchRecipesValidator,
    responses(
        (status = 200, body = RecipePage),
        (status = 400, body = ApiErrorResponse, description = "Malformed request body"),
        (status = 422, body = ApiErrorResponse, description = "No requested ingredient exists in the catalog")
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
    ValidateJson(payload): ValidateJson<SearchRecipesValidator>,
) -> Result<Response<RecipePage>, ApiError> {
    let page = state
        .service
        .search_recipes(SearchRecipesInput {
            user_id: user.user_id,
            ingredients: payload.ingredients,
            diet: payload.diet,
            pagination: query_params.pagination,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
