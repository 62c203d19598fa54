//! Wire models of the public API.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Request query parameters for the weather endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherQuery {
    /// City name (e.g., "Jakarta"); the configured default city when absent
    pub city: Option<String>,
}

impl WeatherQuery {
    /// Read the query from a raw query string.
    ///
    /// Never fails: unknown keys are ignored and a repeated `city` keeps its
    /// last value.
    pub fn from_query_string(query: &str) -> Self {
        let city = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == "city")
            .map(|(_, value)| value.into_owned())
            .last();
        Self { city }
    }
}

/// Icon vocabulary understood by the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "lowercase")]
pub enum UiIcon {
    Sun,
    Cloud,
    Rain,
    Storm,
    Snow,
    Mist,
}

impl UiIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiIcon::Sun => "sun",
            UiIcon::Cloud => "cloud",
            UiIcon::Rain => "rain",
            UiIcon::Storm => "storm",
            UiIcon::Snow => "snow",
            UiIcon::Mist => "mist",
        }
    }
}

impl fmt::Display for UiIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized current conditions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct CurrentSummary {
    /// Temperature in °C, rounded
    pub temp: i64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in km/h, rounded
    pub wind: i64,
    /// Title-cased description
    pub desc: String,
    pub icon: UiIcon,
}

/// One forecast day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ForecastDay {
    /// Localized full day name (e.g., "Senin")
    pub day: String,
    pub min: i64,
    pub max: i64,
    pub icon: UiIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherData {
    pub current: CurrentSummary,
    pub forecast: Vec<ForecastDay>,
}

/// Success envelope of the weather endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherSummary {
    /// Always "success"
    pub status: String,
    /// City name as resolved by the provider
    pub city: String,
    pub data: WeatherData,
}

impl WeatherSummary {
    pub fn success(city: impl Into<String>, data: WeatherData) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            city: city.into(),
            data,
        }
    }
}

/// Error envelope shared by every failing request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}
