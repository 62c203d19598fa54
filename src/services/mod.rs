//! Business logic and service layer modules.
//!
//! The normalization steps (`icon`, `summary`, `forecast`) are pure
//! functions; `weather` performs the upstream I/O and ties them together.

pub mod forecast;
pub mod icon;
pub mod metrics;
pub mod summary;
pub mod weather;

pub use forecast::{reduce_forecast, DEFAULT_MAX_DAYS};
pub use icon::map_icon;
pub use metrics::*;
pub use summary::{build_current, title_case};
pub use weather::{normalize, UpstreamEndpoint, WeatherService};
