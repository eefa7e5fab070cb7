mod client;
mod error;
pub mod models;

pub use client::HaccpClient;
pub use error::HaccpError;
pub use models::CertProduct;

pub type Result<T> = std::result::Result<T, HaccpError>;
