use axum::{extract::State, response::IntoResponse, Json};

use crate::models::HealthStatus;
use crate::state::AppState;

/// Service health and credential status
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service status", body = HealthStatus)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    let credentials = &state.config.credentials;
    Json(HealthStatus {
        status: "ok".to_string(),
        haccp_key_set: credentials.haccp_service_key.is_some(),
        foodqr_key_set: credentials.foodqr_access_key.is_some(),
        food_safety_key_set: credentials.food_safety_api_key.is_some(),
    })
}
