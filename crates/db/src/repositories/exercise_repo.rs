//! Repository for the `exercises` table.
//!
//! All reads return exercises joined with their type's name and
//! complexity, the shape every caller needs. Writes use a CTE around
//! `INSERT/UPDATE ... RETURNING` so the joined row comes back from the
//! same single statement.

use planfit_core::types::DbId;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::exercise::{CreateExercise, ExerciseWithType, UpdateExercise};

/// Joined column list shared across queries.
const JOINED_COLUMNS: &str = "e.id, e.workout_id, e.description, e.exercise_type_id, \
    e.time_minutes, et.name AS exercise_type_name, et.complexity";

/// Provides CRUD operations for exercises.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert a new exercise, returning the created row joined with its
    /// type.
    pub async fn create<'e>(
        exec: impl PgExecutor<'e>,
        input: &CreateExercise,
    ) -> Result<ExerciseWithType, sqlx::Error> {
        let query = format!(
            "WITH e AS (
                INSERT INTO exercises (id, workout_id, description, exercise_type_id, time_minutes)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, workout_id, description, exercise_type_id, time_minutes
             )
             SELECT {JOINED_COLUMNS}
             FROM e JOIN exercise_types et ON e.exercise_type_id = et.id"
        );
        sqlx::query_as::<_, ExerciseWithType>(&query)
            .bind(Uuid::new_v4())
            .bind(input.workout_id)
            .bind(&input.description)
            .bind(input.exercise_type_id)
            .bind(input.time_minutes)
            .fetch_one(exec)
            .await
    }

    /// Find an exercise by ID, joined with its type.
    pub async fn find_by_id<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<ExerciseWithType>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM exercises e
             JOIN exercise_types et ON e.exercise_type_id = et.id
             WHERE e.id = $1"
        );
        sqlx::query_as::<_, ExerciseWithType>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List a workout's exercises joined with their types, ordered by ID.
    ///
    /// When `exclude_id` is set that exercise is left out: the update
    /// path evaluates the target workout's set without the record being
    /// replaced, so its old contribution is not counted twice.
    pub async fn list_by_workout<'e>(
        exec: impl PgExecutor<'e>,
        workout_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<ExerciseWithType>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM exercises e
             JOIN exercise_types et ON e.exercise_type_id = et.id
             WHERE e.workout_id = $1 AND ($2::uuid IS NULL OR e.id <> $2)
             ORDER BY e.id"
        );
        sqlx::query_as::<_, ExerciseWithType>(&query)
            .bind(workout_id)
            .bind(exclude_id)
            .fetch_all(exec)
            .await
    }

    /// Replace an exercise's description, type, time, and owning
    /// workout. Returns `None` if no row exists.
    pub async fn update<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateExercise,
        workout_id: DbId,
    ) -> Result<Option<ExerciseWithType>, sqlx::Error> {
        let query = format!(
            "WITH e AS (
                UPDATE exercises
                SET description = $2, exercise_type_id = $3, time_minutes = $4, workout_id = $5
                WHERE id = $1
                RETURNING id, workout_id, description, exercise_type_id, time_minutes
             )
             SELECT {JOINED_COLUMNS}
             FROM e JOIN exercise_types et ON e.exercise_type_id = et.id"
        );
        sqlx::query_as::<_, ExerciseWithType>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.exercise_type_id)
            .bind(input.time_minutes)
            .bind(workout_id)
            .fetch_optional(exec)
            .await
    }

    /// Reassign an exercise to another workout, leaving every other
    /// field untouched. Returns `None` if no row exists.
    pub async fn set_workout<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
        workout_id: DbId,
    ) -> Result<Option<ExerciseWithType>, sqlx::Error> {
        let query = format!(
            "WITH e AS (
                UPDATE exercises
                SET workout_id = $2
                WHERE id = $1
                RETURNING id, workout_id, description, exercise_type_id, time_minutes
             )
             SELECT {JOINED_COLUMNS}
             FROM e JOIN exercise_types et ON e.exercise_type_id = et.id"
        );
        sqlx::query_as::<_, ExerciseWithType>(&query)
            .bind(id)
            .bind(workout_id)
            .fetch_optional(exec)
            .await
    }

    /// Delete an exercise by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(exec: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
