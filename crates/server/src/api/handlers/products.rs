use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::{AppError, AppResult};
use crate::models::{CreateProduct, Product};
use crate::repositories::ProductRepository;
use crate::state::AppState;

/// Add a curated product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Missing name, ingredients, or identifier"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    payload.barcode = payload.barcode.filter(|v| !v.trim().is_empty());
    payload.report_no = payload.report_no.filter(|v| !v.trim().is_empty());

    if payload.product_name.trim().is_empty() {
        return Err(AppError::bad_request("productName is required"));
    }
    if payload.raw_materials.trim().is_empty() {
        return Err(AppError::bad_request("rawMaterials is required"));
    }
    // Without an identifier the row could never be looked up.
    if payload.barcode.is_none() && payload.report_no.is_none() {
        return Err(AppError::bad_request(
            "at least one of barcode or imrptNo is required",
        ));
    }

    let product = ProductRepository::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
