//! Explicit dashboard application state.

use super::{
    client::ProxyEnvelope,
    preferences::Theme,
    units::TemperatureUnit,
    view::DashboardView,
};
use crate::models::WeatherData;
use chrono::{DateTime, Local};

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// City of the last successful lookup, or the initial city
    pub city: String,
    pub unit: TemperatureUnit,
    pub theme: Theme,
    data: Option<WeatherData>,
    updated_at: Option<DateTime<Local>>,
    last_error: Option<String>,
}

impl DashboardState {
    pub fn new(city: impl Into<String>, theme: Theme) -> Self {
        Self {
            city: city.into(),
            unit: TemperatureUnit::default(),
            theme,
            data: None,
            updated_at: None,
            last_error: None,
        }
    }

    /// Fold a proxy answer into the state.
    ///
    /// Success replaces city and data; an error keeps the previous data so
    /// the last good dashboard stays visible.
    pub fn apply(self, envelope: ProxyEnvelope, now: DateTime<Local>) -> Self {
        match envelope {
            ProxyEnvelope::Success { city, data } => Self {
                city,
                data: Some(data),
                updated_at: Some(now),
                last_error: None,
                ..self
            },
            ProxyEnvelope::Error { message } => self.with_error(message),
        }
    }

    /// Record a failure without touching the displayed data
    pub fn with_error(self, message: impl Into<String>) -> Self {
        Self {
            last_error: Some(message.into()),
            ..self
        }
    }

    pub fn data(&self) -> Option<&WeatherData> {
        self.data.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// View model for the renderer; `None` until the first success
    pub fn view(&self, favorites: Vec<String>) -> Option<DashboardView> {
        let data = self.data.as_ref()?;
        let updated = self
            .updated_at
            .map(|t| format!("Updated: {}", t.format("%H:%M")))
            .unwrap_or_default();

        Some(DashboardView::build(
            &self.city,
            data,
            self.unit,
            self.theme,
            updated,
            favorites,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentSummary, UiIcon};
    use chrono::TimeZone;

    fn data(temp: i64) -> WeatherData {
        WeatherData {
            current: CurrentSummary {
                temp,
                humidity: 60,
                wind: 12,
                desc: "Hujan Ringan".to_string(),
                icon: UiIcon::Rain,
            },
            forecast: vec![],
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 6, 12, 5, 0).single().unwrap()
    }

    #[test]
    fn test_success_replaces_city_and_data() {
        let state = DashboardState::new("Jakarta", Theme::Dark).apply(
            ProxyEnvelope::Success {
                city: "Bandung".to_string(),
                data: data(22),
            },
            noon(),
        );

        assert_eq!(state.city, "Bandung");
        assert_eq!(state.data().unwrap().current.temp, 22);
        assert!(state.last_error().is_none());
        assert_eq!(state.view(vec![]).unwrap().updated, "Updated: 12:05");
    }

    #[test]
    fn test_error_keeps_stale_data_visible() {
        let state = DashboardState::new("Jakarta", Theme::Dark)
            .apply(
                ProxyEnvelope::Success {
                    city: "Jakarta".to_string(),
                    data: data(30),
                },
                noon(),
            )
            .apply(
                ProxyEnvelope::Error {
                    message: "city not found or API key problem".to_string(),
                },
                noon(),
            );

        assert_eq!(state.city, "Jakarta");
        assert_eq!(state.data().unwrap().current.temp, 30);
        assert_eq!(state.last_error(), Some("city not found or API key problem"));
        assert!(state.view(vec![]).is_some());
    }

    #[test]
    fn test_no_view_before_first_success() {
        let state = DashboardState::new("Jakarta", Theme::Light).with_error("offline");
        assert!(state.view(vec![]).is_none());
    }
}
