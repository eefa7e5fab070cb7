use reqwest::Client;

use crate::error::FoodQrError;
use crate::models::{Envelope, QrProduct, SearchMethod};

const BASE_URL: &str = "https://foodqr.kr/openapi/service/qr1007/F007";

pub struct FoodQrClient {
    client: Client,
    access_key: String,
    base_url: String,
}

impl FoodQrClient {
    pub fn new(client: Client, access_key: impl Into<String>) -> Self {
        Self {
            client,
            access_key: access_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(
        client: Client,
        access_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            access_key: access_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Look up a product with the given identifier field. One call is one
    /// sub-attempt; trying both identifier fields is the caller's concern.
    pub async fn find(
        &self,
        method: SearchMethod,
        key: &str,
    ) -> crate::Result<Option<QrProduct>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("accessKey", self.access_key.as_str()),
                ("numOfRows", "10"),
                ("pageNo", "1"),
                ("_type", "json"),
                (method.param(), key),
            ])
            .send()
            .await?;

        let envelope: Envelope = self.handle_response(response).await?;
        Ok(envelope.into_products().into_iter().next())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FoodQrError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| FoodQrError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
