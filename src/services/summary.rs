//! Current conditions normalization.

use crate::{
    error::WeatherError,
    models::{CurrentSummary, RawCurrentConditions},
    services::icon::map_icon,
};

/// m/s to km/h
const MPS_TO_KMH: f64 = 3.6;

/// Build the normalized current-conditions summary.
///
/// Temperatures and wind use round-half-away-from-zero. Fails with
/// [`WeatherError::MalformedUpstreamData`] when the payload has no weather
/// condition or the condition has no description.
pub fn build_current(raw: &RawCurrentConditions) -> Result<CurrentSummary, WeatherError> {
    let condition = raw.weather.first().ok_or_else(|| {
        WeatherError::MalformedUpstreamData("current conditions without weather entry".to_string())
    })?;

    let description = condition.description.as_deref().ok_or_else(|| {
        WeatherError::MalformedUpstreamData("current conditions without description".to_string())
    })?;

    Ok(CurrentSummary {
        temp: raw.main.temp.round() as i64,
        humidity: raw.main.humidity,
        wind: (raw.wind.speed * MPS_TO_KMH).round() as i64,
        desc: title_case(description),
        icon: map_icon(&condition.icon),
    })
}

/// Upper-case the first character of every whitespace-separated word,
/// leaving the remaining characters as they are.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}
