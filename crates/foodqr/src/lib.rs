mod client;
mod error;
pub mod models;

pub use client::FoodQrClient;
pub use error::FoodQrError;
pub use models::{QrProduct, SearchMethod};

pub type Result<T> = std::result::Result<T, FoodQrError>;
