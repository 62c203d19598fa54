//! Weather Dashboard API - a normalizing proxy in front of OpenWeatherMap.
//!
//! The server answers `GET /api/weather?city=<name>` with one compact JSON
//! envelope built from two upstream calls (current conditions and the
//! 5-day/3-hour forecast):
//! - current temperature, humidity, wind in km/h, title-cased description
//! - one forecast entry per calendar day, taken from the 12:00 sample
//! - provider icon codes reduced to a small icon vocabulary
//!
//! ## Architecture
//!
//! - `models/` - public envelope and raw upstream payloads
//! - `services/` - normalization functions and the upstream client
//! - `handlers/` - HTTP handlers and the app factory
//! - `middleware/` - request ids, CORS and response headers, metrics
//! - `config/` - environment-driven configuration
//! - `dashboard/` - UI-agnostic presentation logic for dashboard clients
//!
//! ## Quick Start
//!
//! ```no_run
//! use weather_dashboard::{create_app, AppState};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = AppState::from_env().map_err(std::io::Error::other)?;
//!     actix_web::HttpServer::new(move || create_app(state.clone()))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//! ```

pub mod build_info;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{LogFormat, MetricsConfig, ResponseHeadersConfig, ServerConfig, UpstreamConfig};
pub use error::WeatherError;
pub use handlers::{create_app, create_openapi_spec, get_metrics, health, version, weather, AppState};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware, ResponseHeaders};
pub use models::{
    CurrentSummary, ErrorResponse, ForecastDay, HealthResponse, UiIcon, VersionResponse,
    WeatherData, WeatherQuery, WeatherSummary,
};
pub use services::{
    build_current, map_icon, normalize, reduce_forecast, AppMetrics, WeatherService,
};
