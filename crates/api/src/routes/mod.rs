pub mod exercise_types;
pub mod exercises;
pub mod health;
pub mod workouts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /workouts         workout CRUD + budget validation report
/// /exercises        exercise CRUD, gated mutations, move
/// /exercise-types   shared reference data CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/workouts", workouts::router())
        .nest("/exercises", exercises::router())
        .nest("/exercise-types", exercise_types::router())
}
