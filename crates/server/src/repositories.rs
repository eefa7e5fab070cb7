mod product;
mod product_request;

pub use product::ProductRepository;
pub use product_request::ProductRequestRepository;
