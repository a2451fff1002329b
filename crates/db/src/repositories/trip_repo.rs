//! Repository for the `trips` table.
//!
//! Trips are insert-only: each confirmation is a single independent
//! row insert, and stored rows are never updated.

use sqlx::PgPool;
use wayfarer_core::trip::NewTrip;
use wayfarer_core::types::DbId;

use crate::models::trip::Trip;

/// Column list for `trips` queries.
const COLUMNS: &str = "id, user_id, destination, latitude, longitude, start_date, end_date, \
     travelers, accommodation, accommodation_details, transportation, reason_for_visit, \
     selected_places, all_places, generated_info, estimated_cost, weather, notes, created_at";

/// Provides insert and read operations for completed trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a fully-aggregated trip record.
    pub async fn insert(pool: &PgPool, trip: &NewTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (user_id, destination, latitude, longitude, start_date, \
             end_date, travelers, accommodation, accommodation_details, transportation, \
             reason_for_visit, selected_places, all_places, generated_info, estimated_cost, \
             weather, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(trip.user_id)
            .bind(&trip.destination)
            .bind(trip.latitude)
            .bind(trip.longitude)
            .bind(trip.start_date)
            .bind(trip.end_date)
            .bind(trip.travelers)
            .bind(&trip.accommodation)
            .bind(&trip.accommodation_details)
            .bind(&trip.transportation)
            .bind(&trip.reason_for_visit)
            .bind(&trip.selected_places)
            .bind(&trip.all_places)
            .bind(&trip.generated_info)
            .bind(trip.estimated_cost)
            .bind(&trip.weather)
            .bind(&trip.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's trips, newest start date first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips WHERE user_id = $1 ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
