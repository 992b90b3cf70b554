//! Handlers for the `/exercise-types` resource.
//!
//! Exercise types are shared reference data. The evaluator never writes
//! them; the only domain rules here are the 1–5 complexity range, name
//! uniqueness, and the refusal to delete a type still in use.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planfit_core::budget;
use planfit_core::error::CoreError;
use planfit_core::types::DbId;
use planfit_db::models::exercise_type::{CreateExerciseType, ExerciseType, UpdateExerciseType};
use planfit_db::repositories::ExerciseTypeRepo;

use crate::error::AppResult;
use crate::state::AppState;

fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    Ok(())
}

/// GET /api/v1/exercise-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ExerciseType>>> {
    let types = ExerciseTypeRepo::list_all(&state.pool).await?;
    Ok(Json(types))
}

/// GET /api/v1/exercise-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ExerciseType>> {
    let exercise_type = ExerciseTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Exercise type",
            id,
        })?;
    Ok(Json(exercise_type))
}

/// POST /api/v1/exercise-types
///
/// A duplicate name surfaces as 409 via the unique-constraint classifier.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExerciseType>,
) -> AppResult<(StatusCode, Json<ExerciseType>)> {
    validate_name(&input.name)?;
    budget::validate_complexity(input.complexity)?;

    let exercise_type = ExerciseTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(type_id = %exercise_type.id, name = %exercise_type.name, "Exercise type created");
    Ok((StatusCode::CREATED, Json(exercise_type)))
}

/// PUT /api/v1/exercise-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExerciseType>,
) -> AppResult<Json<ExerciseType>> {
    validate_name(&input.name)?;
    budget::validate_complexity(input.complexity)?;

    let exercise_type = ExerciseTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Exercise type",
            id,
        })?;
    Ok(Json(exercise_type))
}

/// DELETE /api/v1/exercise-types/{id}
///
/// Refused while any exercise still references the type.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let references = ExerciseTypeRepo::count_references(&state.pool, id).await?;
    if references > 0 {
        return Err(CoreError::Conflict(
            "Cannot delete exercise type that is used in exercises".into(),
        )
        .into());
    }

    let deleted = ExerciseTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Exercise type",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
