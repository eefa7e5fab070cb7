use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::repositories::ProductRepository;
use crate::services::provider::{
    EmptyIngredientPolicy, IngredientProvider, ProviderError, ProviderHit,
};

use super::non_empty;

const SOURCE: &str = "Custom Database";

/// Curated-product lookup: the cheapest and most authoritative step,
/// always tried first. Checks the barcode column, then the report-number
/// column.
pub struct LocalRegistryProvider {
    db: SqlitePool,
}

impl LocalRegistryProvider {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientProvider for LocalRegistryProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    fn empty_ingredient_policy(&self) -> EmptyIngredientPolicy {
        EmptyIngredientPolicy::FallThrough
    }

    fn handles_mapped_report_no(&self) -> bool {
        // Remapped report numbers go straight to the government
        // registries; a curated row would already have matched on the
        // original key.
        false
    }

    async fn query(&self, key: &str) -> Result<Option<ProviderHit>, ProviderError> {
        let product = match ProductRepository::find_by_barcode(&self.db, key).await {
            Ok(Some(product)) => Some(product),
            Ok(None) => ProductRepository::find_by_report_no(&self.db, key)
                .await
                .map_err(|e| ProviderError::Transport(e.to_string()))?,
            // Store read failures degrade this step to a miss.
            Err(e) => return Err(ProviderError::Transport(e.to_string())),
        };

        Ok(product.map(|product| ProviderHit {
            product_name: product.product_name,
            raw_ingredients: non_empty(Some(product.raw_materials)),
            source: SOURCE.to_string(),
            // Curated rows are stored pre-normalized.
            already_plain: true,
        }))
    }
}
