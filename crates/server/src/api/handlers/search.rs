use axum::{extract::State, response::IntoResponse, Json};

use crate::error::{AppError, AppResult};
use crate::models::{SearchRequest, SearchResponse};
use crate::services::ResolveError;
use crate::state::AppState;

/// Resolve a barcode or report number to its ingredient statement
#[utoipa::path(
    post,
    path = "/api/search",
    tag = "search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Product resolved", body = SearchResponse),
        (status = 400, description = "Empty search value"),
        (status = 404, description = "Product not found in any database")
    )
)]
pub async fn search_product(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> AppResult<impl IntoResponse> {
    let resolution = state
        .resolver
        .resolve(&payload.search_value)
        .await
        .map_err(|e| match e {
            ResolveError::EmptyKey => AppError::bad_request(e.to_string()),
            ResolveError::NotFound => AppError::not_found(e.to_string()),
        })?;

    Ok(Json(SearchResponse::from(resolution)))
}
