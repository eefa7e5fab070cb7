use utoipa::OpenApi;

use crate::models::{
    CreateProduct, CreateProductRequest, HealthStatus, Product, ProductRequest, SearchRequest,
    SearchResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LabelCheck API",
        version = "1.0.0"
    ),
    tags(
        (name = "search", description = "Ingredient resolution endpoints"),
        (name = "products", description = "Curated product endpoints"),
        (name = "requests", description = "Product request endpoints"),
        (name = "health", description = "Service health endpoints")
    ),
    components(schemas(
        SearchRequest,
        SearchResponse,
        Product,
        CreateProduct,
        ProductRequest,
        CreateProductRequest,
        HealthStatus
    ))
)]
pub struct ApiDoc;
