//! Handlers for `/rentals`.
//!
//! Check-out and check-in are routed so clients get a stable answer, but no
//! rental workflow is behind them: both reject with 501 and change nothing.

use crate::error::{AppError, AppResult};

/// POST /rentals/check-out
pub async fn check_out() -> AppResult<()> {
    tracing::debug!("Rental check-out requested");
    Err(AppError::NotImplemented)
}

/// POST /rentals/check-in
pub async fn check_in() -> AppResult<()> {
    tracing::debug!("Rental check-in requested");
    Err(AppError::NotImplemented)
}
