mod product;
mod request;
mod search;

pub use product::{CreateProduct, Product};
pub use request::{CreateProductRequest, ProductRequest};
pub use search::{HealthStatus, SearchRequest, SearchResponse};
