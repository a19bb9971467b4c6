use crate::config::Config;
use crate::errors::AppError;
use crate::models::BosCallResult;
use crate::signature;
use serde_json::json;
use std::time::Duration;

/// Client for the BOS fortune-calculation API.
///
/// Every request is authenticated with an HMAC-SHA256 signature over the
/// timestamp, method, path and the provider-whitelisted source IP.
#[derive(Clone)]
pub struct BosApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    secret: String,
    origin: String,
    report_id: String,
    source_ip: String,
}

impl BosApiClient {
    /// Creates a new `BosApiClient` from the application configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create BOS client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.bos_base_url.clone(),
            api_key: config.bos_api_key.clone(),
            secret: config.bos_secret.clone(),
            origin: config.bos_origin.clone(),
            report_id: config.bos_report_id.clone(),
            source_ip: config.bos_source_ip.clone(),
        })
    }

    /// Issues one signed report request to BOS.
    ///
    /// Any completed HTTP exchange whose body parses as JSON yields
    /// `Success`, whatever the status class; transport errors and unparseable
    /// bodies yield `Failure`. No retries.
    pub async fn call(&self, name_cn: &str, datetime: &str, gender: &str) -> BosCallResult {
        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        let method = "POST";
        let path = format!("/api/report/{}", self.report_id);

        let sig = signature::sign(&timestamp, method, &path, &self.source_ip, &self.secret);

        let url = format!("{}{}", self.base_url, path);
        tracing::info!("BOS API request: {} ({})", url, name_cn);
        tracing::debug!(
            "BOS request timestamp={} datetime={} gender={}",
            timestamp,
            datetime,
            gender
        );

        let payload = json!({
            "name_cn": name_cn,
            "datetime": datetime,
            "gender": gender,
        });

        let response = self
            .client
            .post(&url)
            .header("Timestamp", &timestamp)
            .header("Authorization", format!("TOKEN {}", sig))
            .header("Api-Key", &self.api_key)
            .header("Origin", &self.origin)
            .json(&payload)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("BOS API request failed: {}", e);
                return BosCallResult::Failure {
                    message: format!("BOS request failed: {}", e),
                };
            }
        };

        let status = response.status();
        match response.json::<serde_json::Value>().await {
            Ok(data) => {
                tracing::info!("BOS API response: status {}", status);
                tracing::debug!("BOS response body: {}", data);
                BosCallResult::Success { data }
            }
            Err(e) => {
                tracing::error!("Failed to parse BOS response ({}): {}", status, e);
                BosCallResult::Failure {
                    message: format!("Failed to parse BOS response: {}", e),
                }
            }
        }
    }
}
