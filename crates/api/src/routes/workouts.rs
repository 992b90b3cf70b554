//! Route definitions for workouts.

use axum::routing::get;
use axum::Router;

use crate::handlers::workouts;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete (cascades exercises)
/// GET    /{id}/validation  -> validation_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workouts::list).post(workouts::create))
        .route(
            "/{id}",
            get(workouts::get_by_id)
                .put(workouts::update)
                .delete(workouts::delete),
        )
        .route("/{id}/validation", get(workouts::validation_report))
}
