//! OpenAPI specification generation and app factory.

use crate::{
    config::{MetricsConfig, ResponseHeadersConfig, UpstreamConfig},
    error::WeatherError,
    handlers::{get_metrics, health, version, weather},
    middleware::{MetricsMiddleware, RequestIdMiddleware, ResponseHeaders},
    services::{AppMetrics, WeatherService},
};
use actix_web::App;
use paperclip::actix::{web, OpenApiExt};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Dashboard API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Proxy in front of OpenWeatherMap that returns a compact, normalized weather envelope.\n\n\
                ## Weather envelope\n\
                `GET /api/weather?city=<name>` answers with\n\
                ```json\n\
                {\n\
                  \"status\": \"success\",\n\
                  \"city\": \"Jakarta\",\n\
                  \"data\": {\n\
                    \"current\": {\"temp\": 30, \"humidity\": 70, \"wind\": 9, \"desc\": \"Cerah\", \"icon\": \"sun\"},\n\
                    \"forecast\": [{\"day\": \"Senin\", \"min\": 24, \"max\": 32, \"icon\": \"rain\"}]\n\
                  }\n\
                }\n\
                ```\n\
                Icons are one of `sun`, `cloud`, `rain`, `storm`, `snow`, `mist`. The forecast holds one \
                entry per day (the 12:00 sample), at most five by default.\n\
                \n\
                Failures answer with HTTP 404 and `{\"status\": \"error\", \"message\": \"...\"}`.\n\
                \n\
                **Configuration:**\n\
                - `OPENWEATHER_API_KEY`: provider credential\n\
                - `WEATHER_DEFAULT_CITY`: city used when `city` is omitted (default: Jakarta)\n\
                - `WEATHER_FORECAST_DAYS`: number of forecast days (default: 5)\n\
                - `CORS_ALLOW_ORIGIN`: allowed origin (default: `*`)".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Shared state handed to every worker
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherService,
    pub metrics: AppMetrics,
    pub metrics_config: MetricsConfig,
    pub headers_config: ResponseHeadersConfig,
}

impl AppState {
    pub fn new(
        upstream: UpstreamConfig,
        metrics_config: MetricsConfig,
        headers_config: ResponseHeadersConfig,
    ) -> Result<Self, WeatherError> {
        let metrics = AppMetrics::new().map_err(|e| {
            WeatherError::InvalidConfig(format!("failed to create metrics registry: {e}"))
        })?;
        let mut weather = WeatherService::new(upstream)?;
        if metrics_config.tracks_upstream() {
            weather = weather.with_metrics(metrics.clone());
        }

        Ok(Self {
            weather,
            metrics,
            metrics_config,
            headers_config,
        })
    }

    /// Build the state from environment configuration
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::new(
            UpstreamConfig::from_env(),
            MetricsConfig::from_env(),
            ResponseHeadersConfig::from_env(),
        )
    }
}

/// Creates the application with all routes and middleware
///
/// Used by the server binary for every worker and by the integration tests.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(ResponseHeaders::new(state.headers_config))
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(state.weather))
        .app_data(web::Data::new(state.metrics))
        .app_data(web::Data::new(state.metrics_config))
        .service(web::resource("/api/weather").route(web::get().to(weather)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
