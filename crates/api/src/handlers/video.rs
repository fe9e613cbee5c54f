//! Handlers for the `/videos` resource.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use videostore_core::error::CoreError;
use videostore_core::types::DbId;
use videostore_core::validation::validate_new_video;
use videostore_db::models::video::{VideoDetail, VideoSummary};
use videostore_db::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FieldSet;
use crate::query::ListVideosParams;
use crate::state::AppState;

/// Body of a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedVideo {
    pub id: DbId,
}

/// GET /videos
///
/// Never rejects on its query string: anything unusable falls back to the
/// default ordering.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<VideoSummary>>> {
    let params = match query {
        Ok(Query(pairs)) => ListVideosParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unparseable query string");
            ListVideosParams::default()
        }
    };
    let videos = VideoRepo::list(&state.pool, params.sort()).await?;
    Ok(Json(videos))
}

/// GET /videos/{id}
///
/// The ID is taken as raw text: anything that is not an integer (including
/// a segment that does not decode as UTF-8) cannot name a video and gets the
/// same 404 as an unknown ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<VideoDetail>> {
    let Path(raw_id) = path.map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("video id {raw_id:?}")))?;
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Video", id))?;
    Ok(Json(video))
}

/// POST /videos
pub async fn create(
    State(state): State<AppState>,
    FieldSet(fields): FieldSet,
) -> AppResult<(StatusCode, Json<CreatedVideo>)> {
    let input = validate_new_video(&fields).map_err(|errors| {
        tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Rejected invalid video");
        CoreError::Validation(errors)
    })?;

    let id = VideoRepo::create(&state.pool, &input).await?;
    tracing::info!(video_id = id, title = %input.title, "Video created");

    Ok((StatusCode::CREATED, Json(CreatedVideo { id })))
}
