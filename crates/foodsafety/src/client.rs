use reqwest::Client;

use crate::error::FoodSafetyError;
use crate::models::{BarcodeRow, Envelope, ResultInfo, CODE_NO_DATA, CODE_OK};

const BASE_URL: &str = "http://openapi.foodsafetykorea.go.kr/api";

pub struct FoodSafetyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FoodSafetyClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Map a barcode to its report number and basic product metadata via
    /// the C005 barcode-link dataset.
    ///
    /// Returns `Ok(None)` for a clean "no data" answer; an unexpected
    /// result code surfaces as [`FoodSafetyError::ResultCode`].
    pub async fn find_by_barcode(&self, barcode: &str) -> crate::Result<Option<BarcodeRow>> {
        // C005 takes its parameters as path segments, not a query string.
        let url = format!(
            "{}/{}/C005/json/1/100/BAR_CD={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(barcode)
        );

        let response = self.client.get(&url).send().await?;
        let envelope: Envelope = self.handle_response(response).await?;

        let dataset = match envelope.c005 {
            Some(dataset) => dataset,
            // Dataset object absent: an error result may sit at the top
            // level instead.
            None => {
                if !is_no_data(envelope.result.as_ref()) {
                    check_result_code(envelope.result.as_ref())?;
                }
                return Ok(None);
            }
        };

        if is_no_data(dataset.result.as_ref()) {
            return Ok(None);
        }
        check_result_code(dataset.result.as_ref())?;

        Ok(dataset.row.unwrap_or_default().into_iter().next())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FoodSafetyError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| FoodSafetyError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

fn is_no_data(result: Option<&ResultInfo>) -> bool {
    matches!(result, Some(info) if info.code.as_deref() == Some(CODE_NO_DATA))
}

/// Any result code other than "ok" (or no code at all) is an anomaly.
fn check_result_code(result: Option<&ResultInfo>) -> crate::Result<()> {
    let Some(info) = result else {
        return Ok(());
    };
    match info.code.as_deref() {
        None | Some(CODE_OK) => Ok(()),
        Some(code) => Err(FoodSafetyError::ResultCode {
            code: code.to_string(),
            message: info.message.clone().unwrap_or_default(),
        }),
    }
}
