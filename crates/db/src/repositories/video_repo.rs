//! Repository for the `videos` table.

use sqlx::PgPool;
use videostore_core::sort::VideoSort;
use videostore_core::types::DbId;
use videostore_core::validation::NewVideo;

use crate::models::video::{VideoDetail, VideoSummary};

const SUMMARY_COLUMNS: &str = "id, title, release_date, available_inventory";

const DETAIL_COLUMNS: &str =
    "title, overview, release_date, total_inventory, available_inventory";

/// Provides the read and insert operations exposed by the catalog.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a validated video, returning its new ID.
    pub async fn create(pool: &PgPool, input: &NewVideo) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO videos
                (title, overview, release_date, total_inventory, available_inventory)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.overview)
        .bind(input.release_date)
        .bind(input.total_inventory)
        .bind(input.available_inventory)
        .fetch_one(pool)
        .await
    }

    /// Find a video by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VideoDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, VideoDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every video in the requested order.
    pub async fn list(pool: &PgPool, sort: VideoSort) -> Result<Vec<VideoSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM videos ORDER BY {}",
            sort.order_by()
        );
        sqlx::query_as::<_, VideoSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total number of videos in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM videos")
            .fetch_one(pool)
            .await
    }
}
