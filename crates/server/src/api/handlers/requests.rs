use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{CreateProductRequest, ProductRequest};
use crate::repositories::ProductRequestRepository;
use crate::state::AppState;

use super::RecentQuery;

/// Record a request to add an unresolvable product
#[utoipa::path(
    post,
    path = "/api/product-requests",
    tag = "requests",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Request recorded", body = ProductRequest),
        (status = 400, description = "Missing product name"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<impl IntoResponse> {
    if payload.product_name.trim().is_empty() {
        return Err(AppError::bad_request("productName is required"));
    }

    let request = ProductRequestRepository::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List recent product requests
#[utoipa::path(
    get,
    path = "/api/product-requests",
    tag = "requests",
    params(RecentQuery),
    responses(
        (status = 200, description = "Recent requests, newest first", body = Vec<ProductRequest>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product_requests(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> AppResult<impl IntoResponse> {
    let requests = ProductRequestRepository::get_recent(&state.db, query.limit).await?;
    Ok(Json(requests))
}
