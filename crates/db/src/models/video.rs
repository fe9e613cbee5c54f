//! Video entity projections.
//!
//! Inserts take [`NewVideo`](videostore_core::validation::NewVideo), which
//! only exists once validation has passed.

use serde::Serialize;
use sqlx::FromRow;
use videostore_core::types::{Date, DbId};

/// One entry of the catalog listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoSummary {
    pub id: DbId,
    pub title: String,
    pub release_date: Date,
    pub available_inventory: i32,
}

/// Full detail view of a single video. The identifier is deliberately absent
/// from the serialized form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoDetail {
    pub title: String,
    pub overview: String,
    pub release_date: Date,
    pub total_inventory: i32,
    pub available_inventory: i32,
}
