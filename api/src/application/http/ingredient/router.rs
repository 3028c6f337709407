use super::handlers::search_ingredients::{__path_search_ingredients, search_ingredients};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/search", state.args.server.root_path),
            get(search_ingredients),
        )
        .layer(middleware::from_fn(user_middleware))
}
