use axum::{Extension, extract::State};
use larder_core::domain::ingredient::{
    ports::IngredientService,
    value_objects::{IngredientMatch, SearchIngredientsInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        query_extractor::QueryParamsExtractor,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_middleware::UserContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchIngredientsResponse {
    pub data: Vec<IngredientMatch>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "ingredient",
    summary = "Search the ingredient catalog",
    description = "Substring search over catalog ingredients. Each hit is flagged for the caller's allergies and diet; nothing is hidden.",
    params(
        ("q" = String, Query, description = "Text to search for"),
        ("limit" = Option<u32>, Query, description = "Maximum hits, default 20, at most 100"),
    ),
    responses(
        (status = 200, body = SearchIngredientsResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing search text")
    )
)]
pub async fn search_ingredients(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<SearchIngredientsResponse>, ApiError> {
    let limit = query_params.limit_as::<u32>();

    let hits = state
        .service
        .search_ingredients(SearchIngredientsInput {
            user_id: user.user_id,
            query: query_params.search.unwrap_or_default(),
            limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchIngredientsResponse { data: hits }))
}
