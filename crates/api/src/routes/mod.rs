pub mod customers;
pub mod health;
pub mod rentals;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                 list, create
/// /videos/{id}            show
///
/// /customers              list
///
/// /rentals/check-out      check out (POST)
/// /rentals/check-in       check in (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/videos", videos::router())
        .nest("/customers", customers::router())
        .nest("/rentals", rentals::router())
}
