#[derive(Debug, thiserror::Error)]
pub enum HaccpError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HACCP API returned status {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("failed to decode HACCP response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl HaccpError {
    /// Whether the failure was a request timeout rather than another
    /// transport problem. Callers degrade both to a miss but log them
    /// differently.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}
