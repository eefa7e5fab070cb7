use async_trait::async_trait;
use thiserror::Error;

/// Normalized result of one successful provider query.
#[derive(Debug, Clone)]
pub struct ProviderHit {
    pub product_name: String,
    /// Ingredient statement, `None` when the registry confirmed the
    /// product but carries no ingredient field. Never `Some("")`.
    pub raw_ingredients: Option<String>,
    /// Human-readable source label for the response payload.
    pub source: String,
    /// Whether the ingredient text is already plain (stored pre-normalized
    /// or stripped by the adapter). Plain text is never re-normalized.
    pub already_plain: bool,
}

/// What the cascade does with a hit whose ingredient field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyIngredientPolicy {
    /// Keep trying later providers (curated rows without ingredients are
    /// not authoritative).
    FallThrough,
    /// Stop: the registry confirmed the product exists, it just has no
    /// ingredient information on file.
    ConfirmedEmpty,
}

/// Why a provider step produced no usable record. All of these degrade to
/// a miss; the distinction only matters for diagnostics.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,

    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered, but with an unexpected error code.
    #[error("upstream anomaly: {0}")]
    Anomaly(String),
}

/// One step of the resolution cascade: "given a key, attempt to retrieve
/// one product." Adapters never retry internally; ordering and fallback
/// belong to the orchestrator.
#[async_trait]
pub trait IngredientProvider: Send + Sync {
    /// Short name for logs and remapped source labels.
    fn name(&self) -> &'static str;

    /// Policy for hits with an empty ingredient field.
    fn empty_ingredient_policy(&self) -> EmptyIngredientPolicy;

    /// Whether the provider can be retried with a report number obtained
    /// from the barcode-link remapping hop.
    fn handles_mapped_report_no(&self) -> bool {
        true
    }

    async fn query(&self, key: &str) -> Result<Option<ProviderHit>, ProviderError>;
}
