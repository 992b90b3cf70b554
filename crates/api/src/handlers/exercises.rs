//! Handlers for the `/exercises` resource.
//!
//! Reads go straight to the pool. The four mutations each open a
//! [`PgStore`] transaction, run the orchestrator against it, and commit
//! only on success; any error drops the transaction and rolls back.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planfit_core::error::CoreError;
use planfit_core::types::DbId;
use planfit_db::models::exercise::{
    CreateExercise, ExerciseWithType, MoveExercise, UpdateExercise,
};
use planfit_db::repositories::ExerciseRepo;

use crate::error::AppResult;
use crate::orchestrator;
use crate::state::AppState;
use crate::store::PgStore;

/// GET /api/v1/exercises/workout/{workout_id}
pub async fn list_by_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<DbId>,
) -> AppResult<Json<Vec<ExerciseWithType>>> {
    let exercises = ExerciseRepo::list_by_workout(&state.pool, workout_id, None).await?;
    Ok(Json(exercises))
}

/// GET /api/v1/exercises/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ExerciseWithType>> {
    let exercise = ExerciseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Exercise",
            id,
        })?;
    Ok(Json(exercise))
}

/// POST /api/v1/exercises
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExercise>,
) -> AppResult<(StatusCode, Json<ExerciseWithType>)> {
    let mut store = PgStore::begin(&state.pool).await?;
    let exercise = orchestrator::create_exercise(&mut store, &input).await?;
    store.commit().await?;

    tracing::info!(
        exercise_id = %exercise.id,
        workout_id = %exercise.workout_id,
        "Exercise created",
    );
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// PUT /api/v1/exercises/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExercise>,
) -> AppResult<Json<ExerciseWithType>> {
    let mut store = PgStore::begin(&state.pool).await?;
    let exercise = orchestrator::update_exercise(&mut store, id, &input).await?;
    store.commit().await?;

    tracing::info!(exercise_id = %id, "Exercise updated");
    Ok(Json(exercise))
}

/// POST /api/v1/exercises/{id}/move
pub async fn move_to_workout(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveExercise>,
) -> AppResult<Json<ExerciseWithType>> {
    let mut store = PgStore::begin(&state.pool).await?;
    let exercise =
        orchestrator::move_exercise(&mut store, id, input.target_workout_id).await?;
    store.commit().await?;

    tracing::info!(
        exercise_id = %id,
        target_workout_id = %input.target_workout_id,
        "Exercise moved",
    );
    Ok(Json(exercise))
}

/// DELETE /api/v1/exercises/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut store = PgStore::begin(&state.pool).await?;
    orchestrator::delete_exercise(&mut store, id).await?;
    store.commit().await?;

    tracing::info!(exercise_id = %id, "Exercise deleted");
    Ok(StatusCode::NO_CONTENT)
}
