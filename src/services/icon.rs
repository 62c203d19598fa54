//! Provider icon code to dashboard icon mapping.

use crate::models::UiIcon;

/// Ordered substring table; the first match wins.
const ICON_TABLE: [(&str, UiIcon); 9] = [
    ("01", UiIcon::Sun),
    ("02", UiIcon::Cloud),
    ("03", UiIcon::Cloud),
    ("04", UiIcon::Cloud),
    ("09", UiIcon::Rain),
    ("10", UiIcon::Rain),
    ("11", UiIcon::Storm),
    ("13", UiIcon::Snow),
    ("50", UiIcon::Mist),
];

/// Map a provider icon code such as "10d" or "04n" to a [`UiIcon`].
///
/// Matching is by substring, so the day/night suffix is ignored. Unknown
/// codes map to [`UiIcon::Cloud`].
pub fn map_icon(code: &str) -> UiIcon {
    ICON_TABLE
        .iter()
        .find(|(needle, _)| code.contains(needle))
        .map(|(_, icon)| *icon)
        .unwrap_or(UiIcon::Cloud)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_and_night_codes_map_identically() {
        assert_eq!(map_icon("01d"), UiIcon::Sun);
        assert_eq!(map_icon("01n"), UiIcon::Sun);
        assert_eq!(map_icon("10d"), map_icon("10n"));
    }

    #[test]
    fn test_full_table() {
        assert_eq!(map_icon("02n"), UiIcon::Cloud);
        assert_eq!(map_icon("03d"), UiIcon::Cloud);
        assert_eq!(map_icon("04d"), UiIcon::Cloud);
        assert_eq!(map_icon("09d"), UiIcon::Rain);
        assert_eq!(map_icon("10d"), UiIcon::Rain);
        assert_eq!(map_icon("11d"), UiIcon::Storm);
        assert_eq!(map_icon("13n"), UiIcon::Snow);
        assert_eq!(map_icon("50d"), UiIcon::Mist);
    }

    #[test]
    fn test_unknown_codes_default_to_cloud() {
        assert_eq!(map_icon("99x"), UiIcon::Cloud);
        assert_eq!(map_icon(""), UiIcon::Cloud);
    }

    #[test]
    fn test_precedence_follows_table_order() {
        // "0913" holds both "09" and "13".
        assert_eq!(map_icon("0913"), UiIcon::Rain);
        assert_eq!(map_icon("1113"), UiIcon::Storm);
        // "5001" holds "50" and "01".
        assert_eq!(map_icon("5001"), UiIcon::Sun);
    }

    #[test]
    fn test_overlapping_substring_counts() {
        // "1013" reads "10" first but also contains "01" at index 1.
        assert_eq!(map_icon("1013"), UiIcon::Sun);
    }
}
