//! Forecast reduction: 3-hour samples to one midday entry per calendar day.

use crate::{
    error::WeatherError,
    models::{ForecastDay, RawForecastEntry},
    services::icon::map_icon,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Time-of-day of the sample chosen to represent a day
pub const MIDDAY: &str = "12:00:00";

/// Default number of days kept
pub const DEFAULT_MAX_DAYS: usize = 5;

/// Reduce a chronological 3-hour forecast feed to at most `max_days` entries.
///
/// Only samples whose time component is exactly [`MIDDAY`] are used, and only
/// the first such sample per date. Dates without a midday sample are left
/// out. Truncation happens after the whole feed has been reduced.
pub fn reduce_forecast(
    entries: &[RawForecastEntry],
    max_days: usize,
) -> Result<Vec<ForecastDay>, WeatherError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut days = Vec::new();

    for entry in entries {
        let Some((date, time)) = split_timestamp(&entry.dt_txt) else {
            continue;
        };
        if time != MIDDAY || seen.contains(date) {
            continue;
        }
        seen.insert(date);

        let icon = entry.weather.first().ok_or_else(|| {
            WeatherError::MalformedUpstreamData(format!(
                "forecast entry {} without weather entry",
                entry.dt_txt
            ))
        })?;

        days.push(ForecastDay {
            day: day_name(date)?.to_string(),
            min: entry.main.temp_min.round() as i64,
            max: entry.main.temp_max.round() as i64,
            icon: map_icon(&icon.icon),
        });
    }

    days.truncate(max_days);
    Ok(days)
}

/// Split "YYYY-MM-DD HH:MM:SS" into its date and time components.
fn split_timestamp(dt_txt: &str) -> Option<(&str, &str)> {
    let date = dt_txt.get(..10)?;
    let time = dt_txt.get(10..)?.strip_prefix(' ')?;
    Some((date, time))
}

/// Localized full weekday name for a "YYYY-MM-DD" date.
pub fn day_name(date: &str) -> Result<&'static str, WeatherError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        WeatherError::MalformedUpstreamData(format!("invalid forecast date {date}: {e}"))
    })?;

    localize_weekday(&parsed.format("%a").to_string())
}

/// Map an English 3-letter weekday abbreviation to its Indonesian name.
pub fn localize_weekday(abbreviation: &str) -> Result<&'static str, WeatherError> {
    match abbreviation {
        "Sun" => Ok("Minggu"),
        "Mon" => Ok("Senin"),
        "Tue" => Ok("Selasa"),
        "Wed" => Ok("Rabu"),
        "Thu" => Ok("Kamis"),
        "Fri" => Ok("Jumat"),
        "Sat" => Ok("Sabtu"),
        other => Err(WeatherError::UnknownWeekday(other.to_string())),
    }
}
