use async_trait::async_trait;
use foodsafety::{FoodSafetyClient, FoodSafetyError};

use crate::services::provider::ProviderError;

/// A barcode resolved to a report number, with the basic metadata the
/// barcode-link dataset carries. Produced only when the primary cascade
/// misses and consumed immediately to retry the registries.
#[derive(Debug, Clone)]
pub struct BarcodeMapping {
    pub barcode: String,
    pub report_no: String,
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
    pub product_type: Option<String>,
}

/// Converts a barcode into a report number. Never a primary ingredient
/// source.
#[async_trait]
pub trait BarcodeRemapper: Send + Sync {
    async fn remap(&self, barcode: &str) -> Result<Option<BarcodeMapping>, ProviderError>;
}

/// C005-backed remapper.
pub struct FoodSafetyRemapper {
    client: Option<FoodSafetyClient>,
}

impl FoodSafetyRemapper {
    pub fn new(client: Option<FoodSafetyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BarcodeRemapper for FoodSafetyRemapper {
    async fn remap(&self, barcode: &str) -> Result<Option<BarcodeMapping>, ProviderError> {
        let Some(client) = &self.client else {
            tracing::debug!(provider = "C005", "credential not configured, skipping");
            return Ok(None);
        };

        let row = client.find_by_barcode(barcode).await.map_err(map_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        // A row without a report number cannot drive a retry.
        let Some(report_no) = row.report_no.filter(|n| !n.trim().is_empty()) else {
            tracing::warn!(provider = "C005", barcode, "row has no report number");
            return Ok(None);
        };

        tracing::info!(provider = "C005", barcode, report_no, "barcode mapped");

        Ok(Some(BarcodeMapping {
            barcode: barcode.to_string(),
            report_no,
            product_name: row.product_name,
            manufacturer: row.manufacturer,
            product_type: row.product_type,
        }))
    }
}

fn map_error(e: FoodSafetyError) -> ProviderError {
    match e {
        FoodSafetyError::ResultCode { .. } => ProviderError::Anomaly(e.to_string()),
        _ if e.is_timeout() => ProviderError::Timeout,
        _ => ProviderError::Transport(e.to_string()),
    }
}
