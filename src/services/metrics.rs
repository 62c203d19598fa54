//! Metrics collection and Prometheus integration service.

use prometheus::{CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

/// Route excluded from request metrics
const METRICS_ROUTE: &str = "/api/metrics";

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    /// Upstream provider calls by endpoint (current/forecast) and outcome
    pub upstream_requests_total: CounterVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub start_time: Instant,
}

impl AppMetrics {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        let upstream_requests_total = CounterVec::new(
            Opts::new(
                "upstream_requests_total",
                "Weather provider calls by endpoint and outcome",
            ),
            &["endpoint", "outcome"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(upstream_requests_total.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        app_info
            .with_label_values(&[
                env!("CARGO_PKG_VERSION"),
                crate::build_info::commit(),
                crate::build_info::build_time(),
            ])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            upstream_requests_total,
            app_uptime_seconds,
            app_info,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == METRICS_ROUTE {
            return;
        }

        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, status.as_str(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Record the outcome of one upstream provider call
    pub fn record_upstream(&self, endpoint: &str, outcome: &str) {
        self.upstream_requests_total
            .with_label_values(&[endpoint, outcome])
            .inc();
    }

    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        encoder.encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_route_is_not_recorded() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("GET", "/api/metrics", 200, Duration::from_millis(3));
        metrics.record_request("GET", "/api/weather", 200, Duration::from_millis(3));

        let output = metrics.render().unwrap();
        assert!(output.contains(r#"route="/api/weather""#));
        assert!(!output.contains(r#"route="/api/metrics""#));
    }

    #[test]
    fn test_upstream_outcomes_are_counted() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_upstream("current", "success");
        metrics.record_upstream("forecast", "unavailable");
        metrics.record_upstream("forecast", "unavailable");

        let counter = metrics
            .upstream_requests_total
            .with_label_values(&["forecast", "unavailable"]);
        assert_eq!(counter.get(), 2.0);
        assert!(metrics.render().unwrap().contains("upstream_requests_total"));
    }
}
