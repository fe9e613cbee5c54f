//! Rental entity model and DTOs.
//!
//! A rental links one video to one customer through plain foreign keys.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use videostore_core::types::{Date, DbId, Timestamp};

/// A rental row from the `rentals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub video_id: DbId,
    pub customer_id: DbId,
    pub checked_out_at: Timestamp,
    pub due_date: Date,
    /// `None` while the copy is still out.
    pub checked_in_at: Option<Timestamp>,
}

/// DTO for recording a new rental.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRental {
    pub video_id: DbId,
    pub customer_id: DbId,
    pub due_date: Date,
}
