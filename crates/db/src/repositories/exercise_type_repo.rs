//! Repository for the `exercise_types` table.

use planfit_core::types::DbId;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::exercise_type::{CreateExerciseType, ExerciseType, UpdateExerciseType};

const COLUMNS: &str = "id, name, complexity";

/// Provides CRUD operations for exercise types.
pub struct ExerciseTypeRepo;

impl ExerciseTypeRepo {
    /// Insert a new exercise type, returning the created row.
    ///
    /// A duplicate name surfaces as a unique violation on
    /// `uq_exercise_types_name`.
    pub async fn create<'e>(
        exec: impl PgExecutor<'e>,
        input: &CreateExerciseType,
    ) -> Result<ExerciseType, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercise_types (id, name, complexity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseType>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(input.complexity)
            .fetch_one(exec)
            .await
    }

    /// Find an exercise type by its ID.
    pub async fn find_by_id<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<ExerciseType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercise_types WHERE id = $1");
        sqlx::query_as::<_, ExerciseType>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List all exercise types, ordered by name.
    pub async fn list_all<'e>(
        exec: impl PgExecutor<'e>,
    ) -> Result<Vec<ExerciseType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercise_types ORDER BY name");
        sqlx::query_as::<_, ExerciseType>(&query)
            .fetch_all(exec)
            .await
    }

    /// Replace an exercise type's fields. Returns `None` if no row exists.
    pub async fn update<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateExerciseType,
    ) -> Result<Option<ExerciseType>, sqlx::Error> {
        let query = format!(
            "UPDATE exercise_types
             SET name = $2, complexity = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.complexity)
            .fetch_optional(exec)
            .await
    }

    /// Delete an exercise type by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(exec: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exercise_types WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count exercises currently referencing a type. Deletion is refused
    /// while this is non-zero.
    pub async fn count_references<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM exercises WHERE exercise_type_id = $1")
                .bind(id)
                .fetch_one(exec)
                .await?;
        Ok(count)
    }
}
