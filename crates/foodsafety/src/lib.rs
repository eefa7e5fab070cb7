mod client;
mod error;
pub mod models;

pub use client::FoodSafetyClient;
pub use error::FoodSafetyError;
pub use models::BarcodeRow;

pub type Result<T> = std::result::Result<T, FoodSafetyError>;
