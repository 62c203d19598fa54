//! Payloads returned by the OpenWeatherMap provider.
//!
//! Only the fields the proxy reads are modelled; serde ignores the rest.
//! A missing or mistyped field fails deserialization, which the client
//! reports as malformed upstream data.

use serde::Deserialize;

/// `GET /weather` response
#[derive(Clone, Debug, Deserialize)]
pub struct RawCurrentConditions {
    /// City name as resolved by the provider
    pub name: String,
    pub main: RawCurrentMain,
    pub wind: RawWind,
    pub weather: Vec<RawCondition>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawCurrentMain {
    /// °C with metric units
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawWind {
    /// m/s with metric units
    pub speed: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawCondition {
    /// Free text in the requested locale. Forecast entries are not required
    /// to carry it.
    #[serde(default)]
    pub description: Option<String>,
    /// Provider icon code, e.g. "10d"
    pub icon: String,
}

/// `GET /forecast` response
#[derive(Clone, Debug, Deserialize)]
pub struct RawForecastResponse {
    pub list: Vec<RawForecastEntry>,
}

/// One 3-hour sample of the forecast feed
#[derive(Clone, Debug, Deserialize)]
pub struct RawForecastEntry {
    /// "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub main: RawForecastMain,
    pub weather: Vec<RawCondition>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawForecastMain {
    pub temp_min: f64,
    pub temp_max: f64,
}
