#[derive(Debug, thiserror::Error)]
pub enum FoodSafetyError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("C005 API returned status {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// The service answered with a result code other than "processed
    /// normally" or "no data". Callers treat this as a miss but should
    /// flag it, since it usually means a quota or key problem.
    #[error("C005 API error {code}: {message}")]
    ResultCode { code: String, message: String },

    #[error("failed to decode C005 response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl FoodSafetyError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
