//! Error taxonomy for the weather proxy.
//!
//! Every failure is terminal for the request that produced it. The detail
//! strings carried by the variants are for logs only; callers receive the
//! fixed messages from [`WeatherError::public_message`].

use crate::models::ErrorResponse;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Message returned for both "city not found" and credential/quota problems.
/// The upstream provider does not let us tell the two apart reliably.
pub const NOT_FOUND_MESSAGE: &str = "city not found or API key problem";

/// Message returned when an internal invariant is violated.
pub const INTERNAL_MESSAGE: &str = "internal error";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// An upstream call failed at the transport level: network error,
    /// timeout, non-success status or empty body.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream answered but the body could not be decoded or lacked
    /// required fields.
    #[error("malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    /// A calendar date produced a weekday abbreviation outside the locale
    /// table. Unreachable for valid dates.
    #[error("unknown weekday abbreviation: {0}")]
    UnknownWeekday(String),

    /// Startup configuration could not be turned into a working client.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WeatherError {
    /// Message safe to show to API callers
    pub fn public_message(&self) -> &'static str {
        match self {
            WeatherError::UpstreamUnavailable(_) | WeatherError::MalformedUpstreamData(_) => {
                NOT_FOUND_MESSAGE
            }
            WeatherError::UnknownWeekday(_) | WeatherError::InvalidConfig(_) => INTERNAL_MESSAGE,
        }
    }
}

impl ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::UpstreamUnavailable(_) | WeatherError::MalformedUpstreamData(_) => {
                StatusCode::NOT_FOUND
            }
            WeatherError::UnknownWeekday(_) | WeatherError::InvalidConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.public_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_collapse_to_not_found() {
        let unavailable = WeatherError::UpstreamUnavailable("status 401".to_string());
        let malformed = WeatherError::MalformedUpstreamData("missing field `main`".to_string());

        assert_eq!(unavailable.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(malformed.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(unavailable.public_message(), NOT_FOUND_MESSAGE);
        assert_eq!(malformed.public_message(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_invariant_violation_is_internal() {
        let err = WeatherError::UnknownWeekday("Xyz".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);
    }

    #[test]
    fn test_public_message_hides_details() {
        let err = WeatherError::UpstreamUnavailable("appid=secret rejected".to_string());
        assert!(!err.public_message().contains("secret"));
    }
}
