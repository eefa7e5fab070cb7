use allergen::DetectionResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::Resolution;

/// Body for `POST /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Barcode or regulatory report number.
    pub search_value: String,
}

/// A resolved product with its detected allergen categories.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub product_name: String,
    /// Which registry produced the result, including mapping/sub-attempt
    /// annotations (e.g. "HACCP (via C005 Barcode Mapping)").
    pub source: String,
    /// Plain-text ingredient statement, or an explicit marker when the
    /// product exists but carries no ingredient information.
    pub raw_materials: String,
    /// Matched allergen categories, keyed by category name.
    #[schema(value_type = Object)]
    pub found_ingredients: DetectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

impl From<Resolution> for SearchResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            product_name: resolution.product_name,
            source: resolution.source,
            raw_materials: resolution.raw_materials,
            found_ingredients: resolution.found_ingredients,
            mapping_info: resolution.mapping_info,
            manufacturer: resolution.manufacturer,
            product_type: resolution.product_type,
        }
    }
}

/// Body for `GET /api/health`: which registry credentials are configured.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub haccp_key_set: bool,
    pub foodqr_key_set: bool,
    pub food_safety_key_set: bool,
}
