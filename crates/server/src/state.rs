use std::sync::Arc;
use std::time::Duration;

use allergen::Taxonomy;
use foodqr::FoodQrClient;
use foodsafety::FoodSafetyClient;
use haccp::HaccpClient;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::services::{
    FoodQrProvider, FoodSafetyRemapper, HaccpProvider, IngredientProvider, LocalRegistryProvider,
    ResolveService,
};

/// One shared HTTP budget for every upstream registry call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub taxonomy: Arc<Taxonomy>,
    pub resolver: Arc<ResolveService>,
}

impl AppState {
    /// Fails only when the HTTP client cannot be built; a client without
    /// the request timeout must never be served.
    pub fn new(db: SqlitePool, config: Config) -> Result<Self, reqwest::Error> {
        let config = Arc::new(config);
        let taxonomy = Arc::new(Taxonomy::korean_default());

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let haccp = config
            .credentials
            .haccp_service_key
            .as_ref()
            .map(|key| HaccpClient::new(http.clone(), key));
        let foodqr = config
            .credentials
            .foodqr_access_key
            .as_ref()
            .map(|key| FoodQrClient::new(http.clone(), key));
        let foodsafety = config
            .credentials
            .food_safety_api_key
            .as_ref()
            .map(|key| FoodSafetyClient::new(http.clone(), key));

        // Cascade order: curated rows first, then the certification
        // registry, then the e-label registry.
        let providers: Vec<Arc<dyn IngredientProvider>> = vec![
            Arc::new(LocalRegistryProvider::new(db.clone())),
            Arc::new(HaccpProvider::new(haccp)),
            Arc::new(FoodQrProvider::new(foodqr)),
        ];
        let remapper = Arc::new(FoodSafetyRemapper::new(foodsafety));

        let resolver = Arc::new(ResolveService::new(taxonomy.clone(), providers, remapper));

        Ok(Self {
            db,
            config,
            taxonomy,
            resolver,
        })
    }
}
