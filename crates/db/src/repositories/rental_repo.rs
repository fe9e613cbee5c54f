//! Repository for the `rentals` table.

use sqlx::PgPool;
use videostore_core::types::DbId;

use crate::models::rental::{CreateRental, Rental};

const COLUMNS: &str = "id, video_id, customer_id, checked_out_at, due_date, checked_in_at";

/// Provides the explicit video -> rentals association.
pub struct RentalRepo;

impl RentalRepo {
    /// Record a rental, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRental) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals (video_id, customer_id, due_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.video_id)
            .bind(input.customer_id)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// All rentals of one video, oldest check-out first.
    pub async fn list_for_video(pool: &PgPool, video_id: DbId) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals WHERE video_id = $1 ORDER BY checked_out_at ASC, id ASC"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }
}
