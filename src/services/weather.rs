//! Weather service: fetches current conditions and forecast from
//! OpenWeatherMap and normalizes them into a [`WeatherSummary`].

use crate::{
    config::UpstreamConfig,
    error::WeatherError,
    models::{RawCurrentConditions, RawForecastEntry, RawForecastResponse, WeatherData, WeatherSummary},
    services::{forecast::reduce_forecast, metrics::AppMetrics, summary::build_current},
    telemetry::redact_secrets,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// The two provider endpoints queried per lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    Current,
    Forecast,
}

impl UpstreamEndpoint {
    fn path(&self) -> &'static str {
        match self {
            UpstreamEndpoint::Current => "weather",
            UpstreamEndpoint::Forecast => "forecast",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UpstreamEndpoint::Current => "current",
            UpstreamEndpoint::Forecast => "forecast",
        }
    }
}

/// Weather service for the OpenWeatherMap integration.
///
/// Holds no per-request state; one instance is shared by all workers.
#[derive(Clone)]
pub struct WeatherService {
    client: Client,
    config: UpstreamConfig,
    metrics: Option<AppMetrics>,
}

impl WeatherService {
    /// Create a new weather service from configuration
    pub fn new(config: UpstreamConfig) -> Result<Self, WeatherError> {
        Url::parse(&config.base_url).map_err(|e| {
            WeatherError::InvalidConfig(format!("invalid base URL {}: {e}", config.base_url))
        })?;

        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| WeatherError::InvalidConfig(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            metrics: None,
        })
    }

    /// Attach a metrics collector for upstream call outcomes
    pub fn with_metrics(mut self, metrics: AppMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Look up current conditions and forecast for a city.
    ///
    /// A missing or empty city falls back to the configured default. Both
    /// upstream calls run concurrently; transport failures of either are
    /// reported before any body is parsed.
    pub async fn lookup(&self, city: Option<&str>) -> Result<WeatherSummary, WeatherError> {
        let city = self.config.resolve_city(city);

        let (current, forecast) = tokio::join!(
            self.fetch(UpstreamEndpoint::Current, city),
            self.fetch(UpstreamEndpoint::Forecast, city),
        );
        let (current, forecast) = (current?, forecast?);

        let current: RawCurrentConditions = parse_body(UpstreamEndpoint::Current, &current)?;
        let forecast: RawForecastResponse = parse_body(UpstreamEndpoint::Forecast, &forecast)?;

        normalize(&current, &forecast.list, self.config.forecast_days)
    }

    /// Build the request URL for an endpoint; query values are URL-encoded.
    pub fn endpoint_url(&self, endpoint: UpstreamEndpoint, city: &str) -> Result<Url, WeatherError> {
        let base = format!("{}/{}", self.config.base_url, endpoint.path());
        Url::parse_with_params(
            &base,
            &[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
                ("lang", self.config.lang.as_str()),
            ],
        )
        .map_err(|e| WeatherError::InvalidConfig(format!("invalid upstream URL {base}: {e}")))
    }

    /// Fetch the raw body of one endpoint
    async fn fetch(&self, endpoint: UpstreamEndpoint, city: &str) -> Result<String, WeatherError> {
        let url = self.endpoint_url(endpoint, city)?;
        debug!(endpoint = endpoint.label(), url = %redact_secrets(url.as_str()), "Calling upstream");

        let result = self.fetch_body(url).await;
        match &result {
            Ok(_) => self.record(endpoint, "success"),
            Err(e) => {
                warn!(endpoint = endpoint.label(), city = %city, error = %e, "Upstream call failed");
                self.record(endpoint, "unavailable");
            }
        }
        result
    }

    async fn fetch_body(&self, url: Url) -> Result<String, WeatherError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::UpstreamUnavailable(redact_secrets(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable(format!(
                "upstream returned status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::UpstreamUnavailable(redact_secrets(&e.to_string())))?;

        if body.trim().is_empty() {
            return Err(WeatherError::UpstreamUnavailable(
                "upstream returned an empty body".to_string(),
            ));
        }

        Ok(body)
    }

    fn record(&self, endpoint: UpstreamEndpoint, outcome: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_upstream(endpoint.label(), outcome);
        }
    }
}

fn parse_body<T: DeserializeOwned>(endpoint: UpstreamEndpoint, body: &str) -> Result<T, WeatherError> {
    serde_json::from_str(body).map_err(|e| {
        WeatherError::MalformedUpstreamData(format!("{} payload: {e}", endpoint.label()))
    })
}

/// Combine both upstream payloads into the success envelope
pub fn normalize(
    current: &RawCurrentConditions,
    forecast: &[RawForecastEntry],
    max_days: usize,
) -> Result<WeatherSummary, WeatherError> {
    let data = WeatherData {
        current: build_current(current)?,
        forecast: reduce_forecast(forecast, max_days)?,
    };
    Ok(WeatherSummary::success(current.name.clone(), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UiIcon;

    fn service() -> WeatherService {
        let config = UpstreamConfig {
            api_key: "s3cret".to_string(),
            base_url: "https://api.test.com/data/2.5".to_string(),
            ..UpstreamConfig::default()
        };
        WeatherService::new(config).unwrap()
    }

    #[test]
    fn test_endpoint_url_encodes_city() {
        let url = service()
            .endpoint_url(UpstreamEndpoint::Current, "São Paulo & co")
            .unwrap();

        assert_eq!(url.path(), "/data/2.5/weather");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "São Paulo & co".to_string()),
                ("appid".to_string(), "s3cret".to_string()),
                ("units".to_string(), "metric".to_string()),
                ("lang".to_string(), "id".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_forecast_endpoint_path() {
        let url = service()
            .endpoint_url(UpstreamEndpoint::Forecast, "Jakarta")
            .unwrap();
        assert_eq!(url.path(), "/data/2.5/forecast");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        };
        assert!(matches!(
            WeatherService::new(config),
            Err(WeatherError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_normalize_builds_envelope() {
        let current: RawCurrentConditions = serde_json::from_str(
            r#"{"name":"Jakarta","main":{"temp":30.4,"humidity":70},"wind":{"speed":2.5},
                "weather":[{"description":"cerah","icon":"01d"}]}"#,
        )
        .unwrap();
        let forecast: RawForecastResponse = serde_json::from_str(
            r#"{"list":[{"dt_txt":"2024-05-06 12:00:00","main":{"temp_min":24.4,"temp_max":31.5},
                "weather":[{"icon":"10d"}]}]}"#,
        )
        .unwrap();

        let summary = normalize(&current, &forecast.list, 5).unwrap();
        assert_eq!(summary.status, "success");
        assert_eq!(summary.city, "Jakarta");
        assert_eq!(summary.data.current.temp, 30);
        assert_eq!(summary.data.current.wind, 9);
        assert_eq!(summary.data.current.desc, "Cerah");
        assert_eq!(summary.data.current.icon, UiIcon::Sun);
        assert_eq!(summary.data.forecast.len(), 1);
        assert_eq!(summary.data.forecast[0].max, 32);
    }

    #[test]
    fn test_parse_body_reports_malformed() {
        let result: Result<RawForecastResponse, _> =
            parse_body(UpstreamEndpoint::Forecast, "<html>oops</html>");
        assert!(matches!(result, Err(WeatherError::MalformedUpstreamData(_))));
    }
}
