mod health;
mod products;
mod requests;
mod search;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for recent-item listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentQuery {
    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

// Re-export all handlers
pub use health::get_health;
pub use products::create_product;
pub use requests::{create_product_request, get_product_requests};
pub use search::search_product;

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use health::__path_get_health;
#[doc(hidden)]
pub use products::__path_create_product;
#[doc(hidden)]
pub use requests::{__path_create_product_request, __path_get_product_requests};
#[doc(hidden)]
pub use search::__path_search_product;
