use super::handlers::get_diet_options::{__path_get_diet_options, get_diet_options};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_diet_options))]
pub struct DietApiDoc;

pub fn diet_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/diets", state.args.server.root_path),
        get(get_diet_options),
    )
}
