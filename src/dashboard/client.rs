//! HTTP client for the proxy's weather endpoint.

use crate::models::WeatherData;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid proxy URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request to proxy failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected proxy response (status {status}): {reason}")]
    InvalidResponse { status: u16, reason: String },
}

/// Either shape the proxy answers with, discriminated by `status`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProxyEnvelope {
    Success { city: String, data: WeatherData },
    Error { message: String },
}

#[derive(Clone, Debug)]
pub struct DashboardClient {
    http: Client,
    endpoint: Url,
}

impl DashboardClient {
    /// `base_url` is the proxy root, e.g. "http://127.0.0.1:8080"
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(base_url)?.join("/api/weather")?;
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { http, endpoint })
    }

    /// Fetch the envelope for `city`. Error envelopes are returned as
    /// [`ProxyEnvelope::Error`], not as `Err`.
    pub async fn fetch(&self, city: &str) -> Result<ProxyEnvelope, ClientError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("city", city)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
            status,
            reason: e.to_string(),
        })
    }
}
