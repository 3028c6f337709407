use super::handlers::{
    list_recipes::{__path_list_recipes, list_recipes},
    matching_recipes::{__path_matching_recipes, matching_recipes},
    search_recipes::{__path_search_recipes, search_recipes},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_recipes, matching_recipes, search_recipes, suggest_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/recipes", root_path), get(list_recipes))
        .route(
            &format!("{}/recipes/matching", root_path),
            get(matching_recipes),
        )
        .route(&format!("{}/recipes/search", root_path), post(search_recipes))
        .route(
            &format!("{}/recipes/suggestions", root_path),
            post(suggest_recipes),
        )
        .layer(middleware::from_fn(user_middleware))
}
