#[derive(Debug, thiserror::Error)]
pub enum FoodQrError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("FoodQR API returned status {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("failed to decode FoodQR response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl FoodQrError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
