use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A curated product row. These are the highest-authority entries and are
/// consulted before any external registry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub barcode: Option<String>,
    #[serde(rename = "imrptNo")]
    pub report_no: Option<String>,
    pub product_name: String,
    /// Stored pre-normalized: plain text, no markup.
    pub raw_materials: String,
}

/// Payload for adding a curated product. Requires a name and raw
/// materials, plus at least one of barcode / report number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub product_name: String,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default, rename = "imrptNo", alias = "reportNumber")]
    pub report_no: Option<String>,
    pub raw_materials: String,
}
