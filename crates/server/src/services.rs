mod provider;
mod providers;
mod remap;
mod resolve;

pub use provider::{EmptyIngredientPolicy, IngredientProvider, ProviderError, ProviderHit};
pub use providers::{FoodQrProvider, HaccpProvider, LocalRegistryProvider};
pub use remap::{BarcodeMapping, BarcodeRemapper, FoodSafetyRemapper};
pub use resolve::{Resolution, ResolveError, ResolveService, BARCODE_REMAP_PREFIX};
