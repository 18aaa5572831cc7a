use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// GET /api/v1/session
pub async fn handle_session(State(state): State<AppState>) -> Json<User> {
    Json(state.operator.clone())
}

/// GET /api/v1/locations
/// Options for the location filter dropdowns.
pub async fn handle_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: state.store.locations(),
    })
}
