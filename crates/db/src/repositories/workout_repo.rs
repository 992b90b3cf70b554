//! Repository for the `workouts` table.

use planfit_core::types::DbId;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::workout::{CreateWorkout, UpdateWorkout, Workout};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, duration_hours, duration_minutes";

/// Provides CRUD operations for workouts.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Insert a new workout, returning the created row.
    pub async fn create<'e>(
        exec: impl PgExecutor<'e>,
        input: &CreateWorkout,
    ) -> Result<Workout, sqlx::Error> {
        let query = format!(
            "INSERT INTO workouts (id, description, duration_hours, duration_minutes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.description)
            .bind(input.duration_hours)
            .bind(input.duration_minutes)
            .fetch_one(exec)
            .await
    }

    /// Find a workout by its ID.
    pub async fn find_by_id<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1");
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Find a workout by ID and lock its row until the surrounding
    /// transaction ends. Mutations that read the workout's exercise set
    /// and then write against it must go through this lock so the
    /// aggregate check is never evaluated against stale totals.
    pub async fn find_by_id_for_update<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List all workouts, ordered by ID.
    pub async fn list_all<'e>(exec: impl PgExecutor<'e>) -> Result<Vec<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts ORDER BY id");
        sqlx::query_as::<_, Workout>(&query).fetch_all(exec).await
    }

    /// Replace a workout's fields. Returns `None` if no row exists.
    pub async fn update<'e>(
        exec: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateWorkout,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!(
            "UPDATE workouts
             SET description = $2, duration_hours = $3, duration_minutes = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.duration_hours)
            .bind(input.duration_minutes)
            .fetch_optional(exec)
            .await
    }

    /// Delete a workout by ID, cascading to its exercises. Returns
    /// `true` if a row was removed.
    pub async fn delete<'e>(exec: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
