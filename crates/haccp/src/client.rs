use reqwest::Client;

use crate::error::HaccpError;
use crate::models::{CertProduct, Envelope};

const BASE_URL: &str = "https://apis.data.go.kr/B553748/CertImgListServiceV3/getCertImgListServiceV3";

pub struct HaccpClient {
    client: Client,
    service_key: String,
    base_url: String,
}

impl HaccpClient {
    /// Create a client. `service_key` is the decoded (non-percent-encoded)
    /// data.go.kr key; it is re-encoded as a query parameter per request.
    pub fn new(client: Client, service_key: impl Into<String>) -> Self {
        Self {
            client,
            service_key: service_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(
        client: Client,
        service_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_key: service_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Look up a product by its regulatory report number.
    ///
    /// Returns the first listed product, or `None` when the service has no
    /// entry for the number.
    pub async fn find_by_report_no(&self, report_no: &str) -> crate::Result<Option<CertProduct>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                ("prdlstReportNo", report_no),
                ("returnType", "json"),
                ("numOfRows", "100"),
                ("pageNo", "1"),
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
            return Err(HaccpError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| HaccpError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
