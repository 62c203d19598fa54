//! Upstream weather provider configuration.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_CITY: &str = "Jakarta";
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// Configuration for the OpenWeatherMap client
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Provider credential, sent as `appid`
    pub api_key: String,
    pub base_url: String,
    /// City queried when the caller supplies none
    pub default_city: String,
    pub units: String,
    /// Locale for the free-text description
    pub lang: String,
    /// Number of forecast days kept after reduction
    pub forecast_days: usize,
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            units: "metric".to_string(),
            lang: "id".to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
            timeout_seconds: 10,
        }
    }
}

impl UpstreamConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();

        let base_url = env::var("OPENWEATHER_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let default_city = env::var("WEATHER_DEFAULT_CITY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.default_city);

        let units = env::var("WEATHER_UNITS").unwrap_or(defaults.units);
        let lang = env::var("WEATHER_LANG").unwrap_or(defaults.lang);

        let forecast_days = env::var("WEATHER_FORECAST_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|days: &usize| *days > 0)
            .unwrap_or(defaults.forecast_days);

        let timeout_seconds = env::var("WEATHER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        Self {
            api_key,
            base_url,
            default_city,
            units,
            lang,
            forecast_days,
            timeout_seconds,
        }
    }

    /// Resolve the city to query. Missing or empty input means the default
    /// city; anything else is forwarded unchanged.
    pub fn resolve_city<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(city) if !city.is_empty() => city,
            _ => &self.default_city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "OPENWEATHER_API_KEY",
        "OPENWEATHER_BASE_URL",
        "WEATHER_DEFAULT_CITY",
        "WEATHER_UNITS",
        "WEATHER_LANG",
        "WEATHER_FORECAST_DAYS",
        "WEATHER_TIMEOUT_SECONDS",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    fn test_upstream_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = UpstreamConfig::from_env();
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_city, "Jakarta");
        assert_eq!(config.units, "metric");
        assert_eq!(config.lang, "id");
        assert_eq!(config.forecast_days, 5);
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_upstream_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        clear_env();

        unsafe {
            env::set_var("OPENWEATHER_API_KEY", "k3y");
            env::set_var("OPENWEATHER_BASE_URL", "http://localhost:9000/data/2.5/");
            env::set_var("WEATHER_DEFAULT_CITY", "Bandung");
            env::set_var("WEATHER_FORECAST_DAYS", "3");
        }

        let config = UpstreamConfig::from_env();
        assert_eq!(config.api_key, "k3y");
        assert_eq!(config.base_url, "http://localhost:9000/data/2.5");
        assert_eq!(config.default_city, "Bandung");
        assert_eq!(config.forecast_days, 3);

        clear_env();
    }

    #[test]
    fn test_invalid_forecast_days_fall_back() {
        let _lock = ENV_MUTEX.lock().unwrap();
        clear_env();

        unsafe { env::set_var("WEATHER_FORECAST_DAYS", "0") };
        assert_eq!(UpstreamConfig::from_env().forecast_days, 5);

        unsafe { env::set_var("WEATHER_FORECAST_DAYS", "many") };
        assert_eq!(UpstreamConfig::from_env().forecast_days, 5);

        clear_env();
    }

    #[test]
    fn test_resolve_city() {
        let config = UpstreamConfig::default();
        assert_eq!(config.resolve_city(Some("Surabaya")), "Surabaya");
        assert_eq!(config.resolve_city(Some("  Medan ")), "  Medan ");
        assert_eq!(config.resolve_city(Some("")), "Jakarta");
        assert_eq!(config.resolve_city(None), "Jakarta");
    }
}
