//! Handlers for the `/customers` resource.

use axum::extract::State;
use axum::Json;
use videostore_db::models::customer::Customer;
use videostore_db::repositories::CustomerRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}
