//! Trip entity model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

/// A row from the `trips` table: the durable, immutable record of a
/// confirmed trip. There is no update path -- export only reads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub destination: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: i32,
    pub accommodation: String,
    pub accommodation_details: Option<String>,
    /// Comma-joined transport method names.
    pub transportation: String,
    pub reason_for_visit: Option<String>,
    /// Comma-joined identifiers of the places the user selected.
    pub selected_places: String,
    /// JSON document holding the full candidate place list.
    pub all_places: serde_json::Value,
    pub generated_info: String,
    pub estimated_cost: i64,
    /// JSON document holding the weather snapshot, if the lookup succeeded.
    pub weather: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}
