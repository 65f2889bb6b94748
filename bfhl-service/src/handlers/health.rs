use axum::{extract::State, Json};

use crate::models::ApiResponse;
use crate::startup::AppState;

/// Liveness probe. Always succeeds while the process is serving.
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    Json(ApiResponse::empty(state.official_email()))
}
