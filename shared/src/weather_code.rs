//! Weather-code lookup table
//!
//! Maps the provider's integer condition codes to a display description and
//! icon. The mapping is total: any code outside the table falls through to
//! the "Unknown" entry, so the client never renders an empty cell.

use serde::Serialize;

/// Display info for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Look up display info for a provider weather code
pub fn weather_info(code: i32) -> WeatherInfo {
    let (description, icon) = match code {
        0 => ("Clear sky", "☀️"),
        1 | 2 => ("Partly cloudy", "🌤️"),
        3 => ("Overcast", "☁️"),
        45 | 48 => ("Foggy", "🌫️"),
        51 | 53 | 55 | 56 | 57 => ("Drizzle", "🌦️"),
        61 | 63 | 65 | 80 | 81 | 82 => ("Rain", "🌧️"),
        71 | 73 | 75 | 77 | 85 | 86 => ("Snow", "❄️"),
        95 => ("Thunderstorm", "⛈️"),
        96 | 99 => ("Storm & hail", "🌩️"),
        _ => ("Unknown", "❔"),
    };
    WeatherInfo { description, icon }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN_CODES: [i32; 26] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 80, 81, 82, 71, 73, 75, 77, 85, 86,
        95, 96, 99,
    ];

    #[test]
    fn test_table_entries_exact() {
        assert_eq!(weather_info(0).description, "Clear sky");
        assert_eq!(weather_info(0).icon, "☀️");
        for code in [1, 2] {
            assert_eq!(weather_info(code).description, "Partly cloudy");
            assert_eq!(weather_info(code).icon, "🌤️");
        }
        assert_eq!(weather_info(3).description, "Overcast");
        assert_eq!(weather_info(3).icon, "☁️");
        for code in [45, 48] {
            assert_eq!(weather_info(code).description, "Foggy");
            assert_eq!(weather_info(code).icon, "🌫️");
        }
        for code in [51, 53, 55, 56, 57] {
            assert_eq!(weather_info(code).description, "Drizzle");
            assert_eq!(weather_info(code).icon, "🌦️");
        }
        for code in [61, 63, 65, 80, 81, 82] {
            assert_eq!(weather_info(code).description, "Rain");
            assert_eq!(weather_info(code).icon, "🌧️");
        }
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(weather_info(code).description, "Snow");
            assert_eq!(weather_info(code).icon, "❄️");
        }
        assert_eq!(weather_info(95).description, "Thunderstorm");
        assert_eq!(weather_info(95).icon, "⛈️");
        for code in [96, 99] {
            assert_eq!(weather_info(code).description, "Storm & hail");
            assert_eq!(weather_info(code).icon, "🌩️");
        }
    }

    #[test]
    fn test_unmapped_codes_fall_back() {
        for code in [-1, 4, 12, 50, 58, 60, 70, 83, 90, 100, 12345, i32::MIN, i32::MAX] {
            let info = weather_info(code);
            assert_eq!(info.description, "Unknown");
            assert_eq!(info.icon, "❔");
        }
    }

    fn is_mapped(code: i32) -> bool {
        matches!(
            code,
            0 | 1 | 2 | 3 | 45 | 48 | 51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 80 | 81 | 82 | 71
                | 73 | 75 | 77 | 85 | 86 | 95 | 96 | 99
        )
    }

    proptest! {
        /// The mapping is total: every integer produces a defined pair
        #[test]
        fn prop_mapping_total(code in any::<i32>()) {
            let info = weather_info(code);
            prop_assert!(!info.description.is_empty());
            prop_assert!(!info.icon.is_empty());
        }

        /// Codes outside the table always resolve to the fallback
        #[test]
        fn prop_unmapped_is_unknown(code in any::<i32>()) {
            prop_assume!(!is_mapped(code));
            let info = weather_info(code);
            prop_assert_eq!(info.description, "Unknown");
            prop_assert_eq!(info.icon, "❔");
        }

        /// Mapped codes never resolve to the fallback
        #[test]
        fn prop_mapped_is_never_unknown(idx in 0usize..KNOWN_CODES.len()) {
            let info = weather_info(KNOWN_CODES[idx]);
            prop_assert_ne!(info.description, "Unknown");
        }
    }
}
