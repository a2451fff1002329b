//! Weather snapshot type and the WMO condition-code icon mapping.

use serde::{Deserialize, Serialize};

/// Weather for the first hourly sample of the trip window.
///
/// `None` at the call sites means the upstream lookup failed; that is a
/// degraded-but-valid state, never an error surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// WMO weather interpretation code.
    pub condition_code: i32,
    /// Icon hint for the renderer (Font Awesome name).
    pub icon: String,
}

impl WeatherSnapshot {
    pub fn new(temperature: f64, condition_code: i32) -> Self {
        Self {
            temperature,
            condition_code,
            icon: icon_for_condition(condition_code).to_string(),
        }
    }
}

/// Map a WMO weather code to a renderer icon hint.
///
/// Unknown codes fall back to `"cloud"`.
pub fn icon_for_condition(code: i32) -> &'static str {
    match code {
        0 => "sun",
        1 => "cloud-sun",
        2 | 3 => "cloud",
        45 | 48 => "smog",
        51 | 53 | 55 | 56 | 57 => "cloud-rain",
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => "cloud-showers-heavy",
        71 | 73 | 75 | 77 | 85 | 86 => "snowflake",
        95 | 96 | 99 => "bolt",
        _ => "cloud",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky_maps_to_sun() {
        assert_eq!(icon_for_condition(0), "sun");
    }

    #[test]
    fn thunderstorm_maps_to_bolt() {
        for code in [95, 96, 99] {
            assert_eq!(icon_for_condition(code), "bolt");
        }
    }

    #[test]
    fn unknown_code_falls_back_to_cloud() {
        assert_eq!(icon_for_condition(-1), "cloud");
        assert_eq!(icon_for_condition(42), "cloud");
    }

    #[test]
    fn snapshot_derives_icon_from_code() {
        let snapshot = WeatherSnapshot::new(31.5, 61);
        assert_eq!(snapshot.icon, "cloud-showers-heavy");
        assert_eq!(snapshot.condition_code, 61);
    }
}
