//! Weather endpoint handler.

use crate::{
    error::WeatherError,
    models::WeatherQuery,
    services::WeatherService,
};
use actix_web::{web, Error, HttpRequest, HttpResponse, ResponseError, Result};
use paperclip::actix::api_v2_operation;

/// Weather endpoint
///
/// Returns normalized current conditions and a daily forecast for a city.
#[api_v2_operation(
    summary = "Weather Lookup Endpoint",
    description = "Returns current conditions and up to five forecast days for a city (e.g., ?city=Jakarta). Without a city the configured default city is used. Upstream failures, including unknown cities and credential problems, produce a 404 with an error envelope.",
    tags("Weather"),
    parameters(
        ("city" = Option<String>, Query, description = "City name (e.g., Jakarta)"),
    ),
    responses(
        (status = 200, description = "Successful response", body = WeatherSummary),
        (status = 404, description = "City not found or API key problem", body = ErrorResponse),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn weather(req: HttpRequest) -> Result<HttpResponse, Error> {
    let Some(service) = req.app_data::<web::Data<WeatherService>>() else {
        return Err(actix_web::error::ErrorServiceUnavailable(
            "Weather service not configured",
        ));
    };

    // A repeated `city` keeps its last value; no query string is rejected.
    let query = WeatherQuery::from_query_string(req.query_string());

    match service.lookup(query.city.as_deref()).await {
        Ok(summary) => {
            tracing::debug!(
                city = %summary.city,
                forecast_days = summary.data.forecast.len(),
                "Returning weather summary"
            );
            Ok(HttpResponse::Ok().json(summary))
        }
        Err(e) => {
            log_lookup_error(query.city.as_deref(), &e);
            Ok(e.error_response())
        }
    }
}

fn log_lookup_error(city: Option<&str>, error: &WeatherError) {
    match error {
        WeatherError::UpstreamUnavailable(_) | WeatherError::MalformedUpstreamData(_) => {
            tracing::warn!(city = ?city, error = %error, "Weather lookup failed");
        }
        WeatherError::UnknownWeekday(_) | WeatherError::InvalidConfig(_) => {
            tracing::error!(city = ?city, error = %error, "Weather lookup hit an internal error");
        }
    }
}
