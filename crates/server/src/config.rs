use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    /// Returns the default data path for this environment
    pub fn default_data_path(&self) -> PathBuf {
        match self {
            Self::Dev => PathBuf::from("./data"),
            Self::Prod => PathBuf::from("/data"),
        }
    }

}

/// Access credentials for the external registries. Each is optional: a
/// missing credential degrades that single registry to an automatic miss
/// instead of failing startup.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Decoded data.go.kr key for the HACCP listing service.
    pub haccp_service_key: Option<String>,
    /// FoodQR e-label access key.
    pub foodqr_access_key: Option<String>,
    /// foodsafetykorea open-API key for the C005 barcode-link dataset.
    pub food_safety_api_key: Option<String>,
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            haccp_service_key: non_empty("SERVICE_KEY"),
            foodqr_access_key: non_empty("FOODQR_ACCESS_KEY"),
            food_safety_api_key: non_empty("FOOD_SAFETY_API_KEY"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub data_path: PathBuf,
    pub database_url: String,
    pub credentials: Credentials,
}

impl Config {
    pub fn new(env: Environment, data_path: impl AsRef<Path>, credentials: Credentials) -> Self {
        let data_path = data_path.as_ref().to_path_buf();
        let database_url = format!(
            "sqlite:{}?mode=rwc",
            data_path.join("labelcheck.db").display()
        );
        Self {
            env,
            data_path,
            database_url,
            credentials,
        }
    }
}
