use async_trait::async_trait;
use haccp::{HaccpClient, HaccpError};

use crate::services::provider::{
    EmptyIngredientPolicy, IngredientProvider, ProviderError, ProviderHit,
};

use super::non_empty;

const SOURCE: &str = "HACCP";
const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Certification-registry lookup by report number.
pub struct HaccpProvider {
    client: Option<HaccpClient>,
}

impl HaccpProvider {
    /// `client` is `None` when no service key is configured; the provider
    /// then degrades to an automatic miss.
    pub fn new(client: Option<HaccpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IngredientProvider for HaccpProvider {
    fn name(&self) -> &'static str {
        "HACCP"
    }

    fn empty_ingredient_policy(&self) -> EmptyIngredientPolicy {
        // A listing hit confirms the product exists even when the
        // ingredient field is blank.
        EmptyIngredientPolicy::ConfirmedEmpty
    }

    async fn query(&self, key: &str) -> Result<Option<ProviderHit>, ProviderError> {
        let Some(client) = &self.client else {
            tracing::debug!(provider = self.name(), "credential not configured, skipping");
            return Ok(None);
        };

        let product = client
            .find_by_report_no(key)
            .await
            .map_err(map_error)?;

        Ok(product.map(|product| ProviderHit {
            product_name: product
                .product_name
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            raw_ingredients: non_empty(product.raw_materials),
            source: SOURCE.to_string(),
            already_plain: false,
        }))
    }
}

fn map_error(e: HaccpError) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(e.to_string())
    }
}
