//! View model derived from dashboard state, plus the rendering capability.

use super::{preferences::Theme, units::TemperatureUnit};
use crate::models::{ForecastDay, WeatherData};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Image URL for a dashboard icon keyword.
///
/// Checks run in order and later matches override earlier ones; keywords
/// without a dedicated image (snow, mist) use the few-clouds picture.
pub fn icon_image_url(keyword: &str) -> String {
    let mut code = "02d";
    if keyword.contains("rain") {
        code = "10d";
    }
    if keyword.contains("storm") {
        code = "11d";
    }
    if keyword.contains("sun") || keyword.contains("clear") {
        code = "01d";
    }
    if keyword.contains("cloud") {
        code = "03d";
    }
    format!("{ICON_BASE_URL}/{code}@2x.png")
}

/// Fill levels (0-100) of the three radial gauges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauges {
    pub temperature: f64,
    pub humidity: f64,
    pub wind: f64,
}

impl Gauges {
    /// Temperature fills at 50°C, wind at 50 km/h.
    pub fn from_current(temp_c: i64, humidity: u8, wind_kmh: i64) -> Self {
        Self {
            temperature: (temp_c as f64 / 50.0 * 100.0).min(100.0),
            humidity: f64::from(humidity),
            wind: (wind_kmh as f64 * 2.0).min(100.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForecastRow {
    pub day: String,
    pub icon_url: String,
    pub max: String,
    pub min: String,
}

/// Everything a renderer needs to draw the dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// Upper-cased city name
    pub city: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub description: String,
    pub icon_url: String,
    /// "Updated: HH:MM", empty before the first success
    pub updated: String,
    pub gauges: Gauges,
    pub forecast: Vec<ForecastRow>,
    pub unit: TemperatureUnit,
    pub theme: Theme,
    pub is_favorite: bool,
    pub favorites: Vec<String>,
}

impl DashboardView {
    pub fn build(
        city: &str,
        data: &WeatherData,
        unit: TemperatureUnit,
        theme: Theme,
        updated: String,
        favorites: Vec<String>,
    ) -> Self {
        let current = &data.current;
        Self {
            city: city.to_uppercase(),
            temperature: unit.format(current.temp as f64),
            humidity: format!("{}%", current.humidity),
            wind: format!("{} km", current.wind),
            description: current.desc.clone(),
            icon_url: icon_image_url(current.icon.as_str()),
            updated,
            gauges: Gauges::from_current(current.temp, current.humidity, current.wind),
            forecast: data.forecast.iter().map(|day| forecast_row(day, unit)).collect(),
            unit,
            theme,
            is_favorite: favorites.iter().any(|c| c == city),
            favorites,
        }
    }
}

fn forecast_row(day: &ForecastDay, unit: TemperatureUnit) -> ForecastRow {
    ForecastRow {
        day: day.day.clone(),
        icon_url: icon_image_url(day.icon.as_str()),
        max: unit.format(day.max as f64),
        min: unit.format(day.min as f64),
    }
}

/// Side-effecting display boundary
pub trait Renderer {
    fn render(&mut self, view: &DashboardView);
    fn show_error(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentSummary, UiIcon};

    #[test]
    fn test_icon_urls() {
        assert!(icon_image_url("sun").ends_with("/01d@2x.png"));
        assert!(icon_image_url("cloud").ends_with("/03d@2x.png"));
        assert!(icon_image_url("rain").ends_with("/10d@2x.png"));
        assert!(icon_image_url("storm").ends_with("/11d@2x.png"));
        assert!(icon_image_url("snow").ends_with("/02d@2x.png"));
        assert!(icon_image_url("mist").ends_with("/02d@2x.png"));
    }

    #[test]
    fn test_gauges_are_capped() {
        let gauges = Gauges::from_current(60, 85, 70);
        assert_eq!(gauges.temperature, 100.0);
        assert_eq!(gauges.humidity, 85.0);
        assert_eq!(gauges.wind, 100.0);

        let gauges = Gauges::from_current(25, 40, 9);
        assert_eq!(gauges.temperature, 50.0);
        assert_eq!(gauges.wind, 18.0);
    }

    #[test]
    fn test_view_formats_in_selected_unit() {
        let data = WeatherData {
            current: CurrentSummary {
                temp: 30,
                humidity: 70,
                wind: 9,
                desc: "Cerah".to_string(),
                icon: UiIcon::Sun,
            },
            forecast: vec![ForecastDay {
                day: "Senin".to_string(),
                min: 24,
                max: 32,
                icon: UiIcon::Rain,
            }],
        };

        let view = DashboardView::build(
            "Jakarta",
            &data,
            TemperatureUnit::Fahrenheit,
            Theme::Dark,
            String::new(),
            vec!["Jakarta".to_string()],
        );

        assert_eq!(view.city, "JAKARTA");
        assert_eq!(view.temperature, "86°F");
        assert_eq!(view.humidity, "70%");
        assert_eq!(view.wind, "9 km");
        assert!(view.is_favorite);
        assert_eq!(view.forecast[0].max, "90°F");
        assert_eq!(view.forecast[0].min, "75°F");
        assert!(view.forecast[0].icon_url.ends_with("/10d@2x.png"));
    }
}
