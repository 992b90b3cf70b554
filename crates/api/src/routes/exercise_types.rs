//! Route definitions for exercise types.

use axum::routing::get;
use axum::Router;

use crate::handlers::exercise_types;
use crate::state::AppState;

/// Routes mounted at `/exercise-types`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete (refused while referenced)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exercise_types::list).post(exercise_types::create))
        .route(
            "/{id}",
            get(exercise_types::get_by_id)
                .put(exercise_types::update)
                .delete(exercise_types::delete),
        )
}
