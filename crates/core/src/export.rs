//! Deterministic rendering context for the external document renderer.
//!
//! The core's only export obligation is to resolve every trip field
//! into its presentation form: dates as `YYYY-MM-DD`, money with two
//! decimal places, and the stored transport forms decoded back into
//! structured lists. The rendering engine itself is out of scope.

use chrono::NaiveDate;
use serde::Serialize;

use crate::place::Place;
use crate::types::DbId;
use crate::weather::WeatherSnapshot;

/// Everything the document renderer needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripExportContext {
    pub trip_id: DbId,
    pub destination: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
    pub travelers: i32,
    pub accommodation: String,
    pub accommodation_details: Option<String>,
    pub transportation: Vec<String>,
    pub reason_for_visit: Option<String>,
    pub selected_places: Vec<String>,
    pub all_places: Vec<Place>,
    pub generated_info: String,
    /// Total cost with two decimal places, e.g. `"950.00"`.
    pub estimated_cost: String,
    pub weather: Option<WeatherSnapshot>,
    pub notes: Option<String>,
}

/// Format a date for export as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format whole currency units with two decimal places.
pub fn format_money(amount: i64) -> String {
    format!("{amount}.00")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(date), "2025-03-01");
    }

    #[test]
    fn date_format_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(format_date(date), "2025-01-07");
    }

    #[test]
    fn money_has_two_decimal_places() {
        assert_eq!(format_money(950), "950.00");
        assert_eq!(format_money(0), "0.00");
        assert_eq!(format_money(200), "200.00");
    }
}
