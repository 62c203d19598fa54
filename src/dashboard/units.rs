//! Temperature display units.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    /// Convert a Celsius value and round it for display
    pub fn convert(&self, celsius: f64) -> i64 {
        match self {
            TemperatureUnit::Celsius => celsius.round() as i64,
            TemperatureUnit::Fahrenheit => (celsius * 9.0 / 5.0 + 32.0).round() as i64,
        }
    }

    /// Format a Celsius value, e.g. "30°C" or "86°F"
    pub fn format(&self, celsius: f64) -> String {
        format!("{}{}", self.convert(celsius), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(TemperatureUnit::Celsius.format(30.0), "30°C");
        assert_eq!(TemperatureUnit::Fahrenheit.format(30.0), "86°F");
        assert_eq!(TemperatureUnit::Fahrenheit.format(-40.0), "-40°F");
        assert_eq!(TemperatureUnit::Fahrenheit.format(21.0), "70°F");
    }

    #[test]
    fn test_toggle() {
        let unit = TemperatureUnit::default();
        assert_eq!(unit, TemperatureUnit::Celsius);
        assert_eq!(unit.toggled(), TemperatureUnit::Fahrenheit);
        assert_eq!(unit.toggled().toggled(), TemperatureUnit::Celsius);
    }
}
