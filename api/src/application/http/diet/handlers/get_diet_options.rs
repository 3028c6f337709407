use axum::extract::State;
use larder_core::domain::diet::{ports::DietService, value_objects::DietSelection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DietOptionsResponse {
    pub data: DietSelection,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diet",
    summary = "Selectable diets",
    description = "Catalog diets split into hard diets, which exclude recipes, and soft diets, which only rank them.",
    responses(
        (status = 200, body = DietOptionsResponse)
    )
)]
pub async fn get_diet_options(
    State(state): State<AppState>,
) -> Result<Response<DietOptionsResponse>, ApiError> {
    let selection = state
        .service
        .diet_options()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DietOptionsResponse { data: selection }))
}
