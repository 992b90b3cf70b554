//! Handlers for the `/workouts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planfit_core::budget;
use planfit_core::error::CoreError;
use planfit_core::types::DbId;
use planfit_db::models::exercise::ExerciseWithType;
use planfit_db::models::workout::{CreateWorkout, UpdateWorkout, Workout};
use planfit_db::repositories::{ExerciseRepo, WorkoutRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/workouts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Workout>>> {
    let workouts = WorkoutRepo::list_all(&state.pool).await?;
    Ok(Json(workouts))
}

/// GET /api/v1/workouts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Workout>> {
    let workout = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id,
        })?;
    Ok(Json(workout))
}

/// POST /api/v1/workouts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkout>,
) -> AppResult<(StatusCode, Json<Workout>)> {
    budget::validate_description(&input.description)?;
    budget::validate_duration(input.duration_hours, input.duration_minutes)?;

    let workout = WorkoutRepo::create(&state.pool, &input).await?;
    tracing::info!(workout_id = %workout.id, "Workout created");
    Ok((StatusCode::CREATED, Json(workout)))
}

/// PUT /api/v1/workouts/{id}
///
/// Shrinking the duration below the current exercise total is allowed:
/// the budget is enforced at exercise mutations, not retroactively.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkout>,
) -> AppResult<Json<Workout>> {
    budget::validate_description(&input.description)?;
    budget::validate_duration(input.duration_hours, input.duration_minutes)?;

    let workout = WorkoutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id,
        })?;
    Ok(Json(workout))
}

/// DELETE /api/v1/workouts/{id}
///
/// Cascades to the workout's exercises.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = WorkoutRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Workout",
            id,
        }
        .into());
    }
    tracing::info!(workout_id = %id, "Workout deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Standing-state budget report for one workout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutValidationReport {
    pub workout: Workout,
    pub exercises: Vec<ExerciseWithType>,
    pub total_complexity: i64,
    pub total_time: i64,
    pub workout_total_minutes: i64,
    pub complexity_exceeded: bool,
    pub time_exceeded: bool,
}

/// GET /api/v1/workouts/{id}/validation
///
/// Recomputes the workout's aggregates from its current exercise set.
/// The flags can be set here even though mutations are gated: the limits
/// are not a standing database constraint, and shrinking a workout's
/// duration after the fact is permitted.
pub async fn validation_report(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkoutValidationReport>> {
    let workout = WorkoutRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id,
        })?;
    let exercises = ExerciseRepo::list_by_workout(&state.pool, id, None).await?;

    let items: Vec<_> = exercises.iter().map(ExerciseWithType::budget_item).collect();
    let totals = budget::totals(&items);
    let workout_total_minutes = workout.total_minutes();

    Ok(Json(WorkoutValidationReport {
        total_complexity: totals.complexity,
        total_time: totals.time_minutes,
        workout_total_minutes,
        complexity_exceeded: totals.complexity > budget::COMPLEXITY_CEILING,
        time_exceeded: totals.time_minutes > workout_total_minutes,
        workout,
        exercises,
    }))
}
