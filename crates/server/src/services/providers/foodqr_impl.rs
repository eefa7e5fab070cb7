use async_trait::async_trait;
use foodqr::{FoodQrClient, FoodQrError, SearchMethod};

use crate::services::provider::{
    EmptyIngredientPolicy, IngredientProvider, ProviderError, ProviderHit,
};

use super::non_empty;

const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// E-label registry lookup. The service does not document which
/// identifier a caller holds, so the key is tried as a report number
/// first and as a barcode second; the source label records which
/// sub-attempt matched.
pub struct FoodQrProvider {
    client: Option<FoodQrClient>,
}

impl FoodQrProvider {
    pub fn new(client: Option<FoodQrClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IngredientProvider for FoodQrProvider {
    fn name(&self) -> &'static str {
        "FoodQR"
    }

    fn empty_ingredient_policy(&self) -> EmptyIngredientPolicy {
        EmptyIngredientPolicy::ConfirmedEmpty
    }

    async fn query(&self, key: &str) -> Result<Option<ProviderHit>, ProviderError> {
        let Some(client) = &self.client else {
            tracing::debug!(provider = self.name(), "credential not configured, skipping");
            return Ok(None);
        };

        for method in [SearchMethod::ReportNo, SearchMethod::Barcode] {
            match client.find(method, key).await {
                Ok(Some(product)) => {
                    // prvwCn is an HTML fragment; strip it here so the
                    // orchestrator never sees markup from this provider.
                    let raw_ingredients = non_empty(
                        product.preview_html.as_deref().map(allergen::normalize),
                    );
                    return Ok(Some(ProviderHit {
                        product_name: product
                            .product_name
                            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
                        raw_ingredients,
                        source: format!("Food QR (e-Label) - {}", method),
                        already_plain: true,
                    }));
                }
                Ok(None) => continue,
                // A failed sub-attempt must not block the other one.
                Err(e) => {
                    log_sub_attempt_failure(method, &e);
                    continue;
                }
            }
        }

        Ok(None)
    }
}

fn log_sub_attempt_failure(method: SearchMethod, e: &FoodQrError) {
    if e.is_timeout() {
        tracing::warn!(provider = "FoodQR", %method, "sub-attempt timed out");
    } else {
        tracing::warn!(provider = "FoodQR", %method, error = %e, "sub-attempt failed");
    }
}
