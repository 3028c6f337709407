use super::handlers::augment_shopping_list::{
    __path_augment_shopping_list, augment_shopping_list,
};
use crate::application::{http::server::app_state::AppState, user_middleware::user_middleware};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(augment_shopping_list))]
pub struct ShoppingApiDoc;

pub fn shopping_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/shopping-list/augment", state.args.server.root_path),
            post(augment_shopping_list),
        )
        .layer(middleware::from_fn(user_middleware))
}
