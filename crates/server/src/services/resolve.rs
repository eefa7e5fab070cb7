use std::sync::Arc;

use allergen::{normalize, DetectionResult, Taxonomy};
use thiserror::Error;

use crate::services::provider::{
    EmptyIngredientPolicy, IngredientProvider, ProviderError, ProviderHit,
};
use crate::services::remap::{BarcodeMapping, BarcodeRemapper};

/// Keys with this prefix are barcodes eligible for the barcode-link
/// remapping hop (GS1 country prefix for Korea).
pub const BARCODE_REMAP_PREFIX: &str = "88";

const UNKNOWN_PRODUCT: &str = "Unknown Product";
const NO_INGREDIENT_INFO: &str = "No ingredient information available.";
const NO_DETAIL_VIA_BARCODE: &str =
    "Product found via barcode, but detailed ingredient information is not available.";
const BASIC_INFO_SOURCE: &str = "C005 Barcode Link API (Basic Info Only)";

/// Final outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub product_name: String,
    pub source: String,
    pub raw_materials: String,
    pub found_ingredients: DetectionResult,
    pub mapping_info: Option<String>,
    pub manufacturer: Option<String>,
    pub product_type: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Please enter a product number or barcode")]
    EmptyKey,

    #[error("Product not found in any database.")]
    NotFound,
}

/// Drives the provider cascade: ordered attempts, short-circuit on the
/// first usable hit, one conditional barcode-remapping detour, no other
/// retries. Provider failures of any kind degrade to a miss for that
/// step; only exhaustion becomes an error.
pub struct ResolveService {
    taxonomy: Arc<Taxonomy>,
    providers: Vec<Arc<dyn IngredientProvider>>,
    remapper: Arc<dyn BarcodeRemapper>,
}

impl ResolveService {
    pub fn new(
        taxonomy: Arc<Taxonomy>,
        providers: Vec<Arc<dyn IngredientProvider>>,
        remapper: Arc<dyn BarcodeRemapper>,
    ) -> Self {
        Self {
            taxonomy,
            providers,
            remapper,
        }
    }

    pub async fn resolve(&self, key: &str) -> Result<Resolution, ResolveError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ResolveError::EmptyKey);
        }

        tracing::info!(key, "resolving");

        if let Some(resolution) = self.run_cascade(key, None).await {
            return Ok(resolution);
        }

        // Remapping costs an extra round trip and only applies to one
        // identifier shape, so it runs last and conditionally.
        if key.starts_with(BARCODE_REMAP_PREFIX) {
            if let Some(resolution) = self.remap_and_retry(key).await {
                return Ok(resolution);
            }
        }

        tracing::info!(key, "all providers missed");
        Err(ResolveError::NotFound)
    }

    /// One pass over the providers. With a mapping the pass is a retry
    /// keyed by the mapped report number: local lookup is skipped and
    /// confirmed-empty hits fall through instead of terminating, since
    /// the degraded metadata answer is better than an empty one.
    async fn run_cascade(&self, key: &str, mapping: Option<&BarcodeMapping>) -> Option<Resolution> {
        for provider in &self.providers {
            if mapping.is_some() && !provider.handles_mapped_report_no() {
                continue;
            }

            let mut hit = match provider.query(key).await {
                Ok(Some(hit)) => hit,
                Ok(None) => {
                    tracing::debug!(provider = provider.name(), key, "miss");
                    continue;
                }
                Err(e) => {
                    log_provider_error(provider.name(), key, &e);
                    continue;
                }
            };

            tracing::info!(provider = provider.name(), key, "hit");

            match hit.raw_ingredients.take() {
                Some(raw) => {
                    return Some(self.build_resolution(
                        provider.name(),
                        hit.source,
                        hit.product_name,
                        raw,
                        hit.already_plain,
                        mapping,
                    ))
                }
                None => match provider.empty_ingredient_policy() {
                    EmptyIngredientPolicy::FallThrough => continue,
                    EmptyIngredientPolicy::ConfirmedEmpty if mapping.is_some() => continue,
                    EmptyIngredientPolicy::ConfirmedEmpty => {
                        return Some(confirmed_empty(hit));
                    }
                },
            }
        }

        None
    }

    async fn remap_and_retry(&self, key: &str) -> Option<Resolution> {
        let mapping = match self.remapper.remap(key).await {
            Ok(Some(mapping)) => mapping,
            Ok(None) => return None,
            Err(e) => {
                log_provider_error("C005", key, &e);
                return None;
            }
        };

        if let Some(resolution) = self.run_cascade(&mapping.report_no, Some(&mapping)).await {
            return Some(resolution);
        }

        // Registries had nothing for the mapped number either; surface
        // the basic metadata the mapping itself carried.
        Some(Resolution {
            product_name: mapping
                .product_name
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            source: BASIC_INFO_SOURCE.to_string(),
            raw_materials: NO_DETAIL_VIA_BARCODE.to_string(),
            found_ingredients: DetectionResult::default(),
            mapping_info: None,
            manufacturer: mapping.manufacturer,
            product_type: mapping.product_type,
        })
    }

    fn build_resolution(
        &self,
        provider_name: &str,
        source: String,
        product_name: String,
        raw: String,
        already_plain: bool,
        mapping: Option<&BarcodeMapping>,
    ) -> Resolution {
        let text = if already_plain { raw } else { normalize(&raw) };
        let found_ingredients = self.taxonomy.detect(&text);

        let (source, mapping_info) = match mapping {
            Some(mapping) => (
                format!("{} (via C005 Barcode Mapping)", provider_name),
                Some(mapping_info(mapping)),
            ),
            None => (source, None),
        };

        // The registry's own name wins; the mapping name is the fallback.
        let product_name = if product_name == UNKNOWN_PRODUCT {
            mapping
                .and_then(|m| m.product_name.clone())
                .unwrap_or(product_name)
        } else {
            product_name
        };

        Resolution {
            product_name,
            source,
            raw_materials: text,
            found_ingredients,
            mapping_info,
            manufacturer: None,
            product_type: None,
        }
    }
}

fn confirmed_empty(hit: ProviderHit) -> Resolution {
    Resolution {
        product_name: hit.product_name,
        source: hit.source,
        raw_materials: NO_INGREDIENT_INFO.to_string(),
        found_ingredients: DetectionResult::default(),
        mapping_info: None,
        manufacturer: None,
        product_type: None,
    }
}

fn mapping_info(mapping: &BarcodeMapping) -> String {
    format!(
        "Barcode {} → Product No. {}",
        mapping.barcode, mapping.report_no
    )
}

fn log_provider_error(provider: &str, key: &str, e: &ProviderError) {
    match e {
        ProviderError::Timeout => {
            tracing::warn!(provider, key, "request timed out, treating as miss")
        }
        ProviderError::Transport(msg) => {
            tracing::warn!(provider, key, error = %msg, "transport failure, treating as miss")
        }
        ProviderError::Anomaly(msg) => {
            tracing::warn!(provider, key, error = %msg, "upstream anomaly, treating as miss")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    /// Scripted provider: answers from a fixed table and counts calls.
    struct FakeProvider {
        name: &'static str,
        policy: EmptyIngredientPolicy,
        mapped_retry: bool,
        responses: Vec<(String, ProviderHit)>,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(name: &'static str, policy: EmptyIngredientPolicy) -> Self {
            Self {
                name,
                policy,
                mapped_retry: true,
                responses: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn local() -> Self {
            let mut provider = Self::new("local", EmptyIngredientPolicy::FallThrough);
            provider.mapped_retry = false;
            provider
        }

        fn with_hit(mut self, key: &str, hit: ProviderHit) -> Self {
            self.responses.push((key.to_string(), hit));
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl IngredientProvider for FakeProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn empty_ingredient_policy(&self) -> EmptyIngredientPolicy {
            self.policy
        }

        fn handles_mapped_report_no(&self) -> bool {
            self.mapped_retry
        }

        async fn query(&self, key: &str) -> Result<Option<ProviderHit>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .responses
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, hit)| hit.clone()))
        }
    }

    struct FakeRemapper {
        mapping: Option<BarcodeMapping>,
        calls: AtomicUsize,
    }

    impl FakeRemapper {
        fn none() -> Self {
            Self {
                mapping: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_mapping(mapping: BarcodeMapping) -> Self {
            Self {
                mapping: Some(mapping),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BarcodeRemapper for FakeRemapper {
        async fn remap(&self, _barcode: &str) -> Result<Option<BarcodeMapping>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.mapping.clone())
        }
    }

    fn hit(name: &str, source: &str, ingredients: Option<&str>) -> ProviderHit {
        ProviderHit {
            product_name: name.to_string(),
            raw_ingredients: ingredients.map(|s| s.to_string()),
            source: source.to_string(),
            already_plain: true,
        }
    }

    fn service(
        providers: Vec<Arc<dyn IngredientProvider>>,
        remapper: Arc<dyn BarcodeRemapper>,
    ) -> ResolveService {
        ResolveService::new(Arc::new(Taxonomy::korean_default()), providers, remapper)
    }

    #[tokio::test]
    async fn empty_key_is_rejected_before_any_provider_call() {
        let local = Arc::new(FakeProvider::local());
        let remapper = Arc::new(FakeRemapper::none());
        let svc = service(vec![local.clone()], remapper.clone());

        assert_eq!(svc.resolve("   ").await.unwrap_err(), ResolveError::EmptyKey);
        assert_eq!(local.calls(), 0);
        assert_eq!(remapper.calls(), 0);
    }

    #[tokio::test]
    async fn local_hit_short_circuits_the_cascade() {
        let local = Arc::new(
            FakeProvider::local().with_hit("100", hit("커스텀 과자", "Custom Database", Some("우유, 설탕"))),
        );
        let haccp = Arc::new(FakeProvider::new("HACCP", EmptyIngredientPolicy::ConfirmedEmpty));
        let svc = service(vec![local, haccp.clone()], Arc::new(FakeRemapper::none()));

        let res = svc.resolve("100").await.unwrap();
        assert_eq!(res.source, "Custom Database");
        assert_eq!(res.product_name, "커스텀 과자");
        assert!(res.found_ingredients.contains("우유"));
        assert!(res.mapping_info.is_none());
        // No network adapter was consulted.
        assert_eq!(haccp.calls(), 0);
    }

    #[tokio::test]
    async fn local_hit_with_empty_ingredients_falls_through() {
        let local =
            Arc::new(FakeProvider::local().with_hit("100", hit("빈 항목", "Custom Database", None)));
        let haccp = Arc::new(
            FakeProvider::new("HACCP", EmptyIngredientPolicy::ConfirmedEmpty)
                .with_hit("100", hit("인증 과자", "HACCP", Some("밀가루"))),
        );
        let svc = service(vec![local, haccp], Arc::new(FakeRemapper::none()));

        let res = svc.resolve("100").await.unwrap();
        assert_eq!(res.source, "HACCP");
        assert!(res.found_ingredients.contains("밀"));
    }

    #[tokio::test]
    async fn registry_hit_with_empty_ingredients_is_a_terminal_success() {
        let haccp = Arc::new(
            FakeProvider::new("HACCP", EmptyIngredientPolicy::ConfirmedEmpty)
                .with_hit("200", hit("미등록 성분 제품", "HACCP", None)),
        );
        let foodqr = Arc::new(FakeProvider::new(
            "FoodQR",
            EmptyIngredientPolicy::ConfirmedEmpty,
        ));
        let svc = service(vec![haccp, foodqr.clone()], Arc::new(FakeRemapper::none()));

        let res = svc.resolve("200").await.unwrap();
        assert_eq!(res.raw_materials, NO_INGREDIENT_INFO);
        assert!(res.found_ingredients.is_empty());
        // Confirmed-empty stops the cascade.
        assert_eq!(foodqr.calls(), 0);
    }

    #[tokio::test]
    async fn provider_errors_degrade_to_misses() {
        struct FailingProvider;

        #[async_trait]
        impl IngredientProvider for FailingProvider {
            fn name(&self) -> &'static str {
                "HACCP"
            }
            fn empty_ingredient_policy(&self) -> EmptyIngredientPolicy {
                EmptyIngredientPolicy::ConfirmedEmpty
            }
            async fn query(&self, _key: &str) -> Result<Option<ProviderHit>, ProviderError> {
                Err(ProviderError::Timeout)
            }
        }

        let foodqr = Arc::new(
            FakeProvider::new("FoodQR", EmptyIngredientPolicy::ConfirmedEmpty).with_hit(
                "300",
                hit("라벨 제품", "Food QR (e-Label) - product report number (imrptNo)", Some("대두")),
            ),
        );
        let svc = service(
            vec![Arc::new(FailingProvider), foodqr],
            Arc::new(FakeRemapper::none()),
        );

        let res = svc.resolve("300").await.unwrap();
        assert_eq!(res.source, "Food QR (e-Label) - product report number (imrptNo)");
        assert!(res.found_ingredients.contains("대두"));
    }

    #[tokio::test]
    async fn non_barcode_key_never_reaches_the_remapper() {
        let svc = service(
            vec![Arc::new(FakeProvider::local())],
            Arc::new(FakeRemapper::none()),
        );
        let remapper = Arc::new(FakeRemapper::none());
        let svc2 = service(vec![Arc::new(FakeProvider::local())], remapper.clone());

        assert_eq!(svc.resolve("1234567").await.unwrap_err(), ResolveError::NotFound);
        assert_eq!(svc2.resolve("20210012345").await.unwrap_err(), ResolveError::NotFound);
        assert_eq!(remapper.calls(), 0);
    }

    #[tokio::test]
    async fn barcode_key_with_no_mapping_is_not_found() {
        let remapper = Arc::new(FakeRemapper::none());
        let svc = service(vec![Arc::new(FakeProvider::local())], remapper.clone());

        assert_eq!(
            svc.resolve("8801234567890").await.unwrap_err(),
            ResolveError::NotFound
        );
        assert_eq!(remapper.calls(), 1);
    }

    fn snack_mapping() -> BarcodeMapping {
        BarcodeMapping {
            barcode: "8801019602498".to_string(),
            report_no: "12345".to_string(),
            product_name: Some("Test Snack".to_string()),
            manufacturer: Some("테스트식품".to_string()),
            product_type: Some("과자".to_string()),
        }
    }

    #[tokio::test]
    async fn remapped_certification_hit_carries_mapping_trace() {
        let local = Arc::new(FakeProvider::local());
        let haccp = Arc::new(
            FakeProvider::new("HACCP", EmptyIngredientPolicy::ConfirmedEmpty)
                .with_hit("12345", hit("Test Snack", "HACCP", Some("Contains milk and wheat"))),
        );
        let foodqr = Arc::new(FakeProvider::new(
            "FoodQR",
            EmptyIngredientPolicy::ConfirmedEmpty,
        ));
        let svc = service(
            vec![local.clone(), haccp.clone(), foodqr],
            Arc::new(FakeRemapper::with_mapping(snack_mapping())),
        );

        let res = svc.resolve("8801019602498").await.unwrap();
        assert_eq!(res.product_name, "Test Snack");
        assert_eq!(res.source, "HACCP (via C005 Barcode Mapping)");
        assert_eq!(
            res.mapping_info.as_deref(),
            Some("Barcode 8801019602498 → Product No. 12345")
        );
        assert!(res.found_ingredients.contains("우유"));
        assert!(res.found_ingredients.contains("밀"));

        // Primary pass plus mapped retry for HACCP; local is not retried
        // with the mapped report number.
        assert_eq!(haccp.calls(), 2);
        assert_eq!(local.calls(), 1);
    }

    #[tokio::test]
    async fn remapped_hit_without_registry_name_uses_mapping_name() {
        let haccp = Arc::new(
            FakeProvider::new("HACCP", EmptyIngredientPolicy::ConfirmedEmpty)
                .with_hit("12345", hit("Unknown Product", "HACCP", Some("우유"))),
        );
        let svc = service(
            vec![haccp],
            Arc::new(FakeRemapper::with_mapping(snack_mapping())),
        );

        let res = svc.resolve("8801019602498").await.unwrap();
        assert_eq!(res.product_name, "Test Snack");
    }

    #[tokio::test]
    async fn remapped_empty_ingredients_fall_through_to_degraded_success() {
        // The mapped HACCP retry confirms the product but has no
        // ingredient field; unlike the primary pass this must not stop
        // the retry, and the final answer degrades to mapping metadata.
        let haccp = Arc::new(
            FakeProvider::new("HACCP", EmptyIngredientPolicy::ConfirmedEmpty)
                .with_hit("12345", hit("Test Snack", "HACCP", None)),
        );
        let svc = service(
            vec![haccp],
            Arc::new(FakeRemapper::with_mapping(snack_mapping())),
        );

        let res = svc.resolve("8801019602498").await.unwrap();
        assert_eq!(res.source, BASIC_INFO_SOURCE);
        assert_eq!(res.raw_materials, NO_DETAIL_VIA_BARCODE);
        assert_eq!(res.manufacturer.as_deref(), Some("테스트식품"));
        assert_eq!(res.product_type.as_deref(), Some("과자"));
        assert!(res.found_ingredients.is_empty());
        assert!(res.mapping_info.is_none());
    }

    #[tokio::test]
    async fn key_is_trimmed_before_matching() {
        let local = Arc::new(
            FakeProvider::local().with_hit("100", hit("과자", "Custom Database", Some("설탕, 우유"))),
        );
        let svc = service(vec![local], Arc::new(FakeRemapper::none()));

        let res = svc.resolve("  100  ").await.unwrap();
        assert_eq!(res.product_name, "과자");
    }
}
