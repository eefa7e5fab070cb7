mod foodqr_impl;
mod haccp_impl;
mod local;

pub use foodqr_impl::FoodQrProvider;
pub use haccp_impl::HaccpProvider;
pub use local::LocalRegistryProvider;

/// Empty ingredient strings count as "no ingredient field".
fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}
