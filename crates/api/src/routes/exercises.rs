//! Route definitions for exercises.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /workout/{workout_id}  -> list_by_workout
/// POST   /                      -> create (budget-gated)
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update (budget-gated, may move)
/// POST   /{id}/move             -> move_to_workout (budget-gated)
/// DELETE /{id}                  -> delete (never gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(exercises::create))
        .route("/workout/{workout_id}", get(exercises::list_by_workout))
        .route(
            "/{id}",
            get(exercises::get_by_id)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .route("/{id}/move", post(exercises::move_to_workout))
}
