//! Prometheus metrics switches.

use std::env;

/// What the service records and exposes at `/api/metrics`
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    /// `METRICS_ENABLED`: request metrics and the metrics endpoint
    pub enabled: bool,
    /// `METRICS_UPSTREAM_ENABLED`: per-call counters for the weather
    /// provider. Ignored when `enabled` is false.
    pub upstream: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            upstream: true,
        }
    }
}

impl MetricsConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env_flag("METRICS_ENABLED", true),
            upstream: env_flag("METRICS_UPSTREAM_ENABLED", true),
        }
    }

    /// Whether provider calls are counted
    pub fn tracks_upstream(&self) -> bool {
        self.enabled && self.upstream
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().to_ascii_lowercase().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            env::remove_var("METRICS_ENABLED");
            env::remove_var("METRICS_UPSTREAM_ENABLED");
        }
    }

    #[test]
    fn test_metrics_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = MetricsConfig::from_env();
        assert!(config.enabled);
        assert!(config.upstream);
        assert!(config.tracks_upstream());
    }

    #[test]
    fn test_metrics_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        clear_env();

        unsafe { env::set_var("METRICS_UPSTREAM_ENABLED", "FALSE") };
        let config = MetricsConfig::from_env();
        assert!(config.enabled);
        assert!(!config.tracks_upstream());

        unsafe {
            env::set_var("METRICS_ENABLED", "false");
            env::set_var("METRICS_UPSTREAM_ENABLED", "true");
        }
        assert!(!MetricsConfig::from_env().tracks_upstream());

        unsafe { env::set_var("METRICS_ENABLED", "sometimes") };
        assert!(MetricsConfig::from_env().enabled);

        clear_env();
    }
}
