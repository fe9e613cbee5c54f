use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Routes mounted at `/customers`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(customer::list))
}
