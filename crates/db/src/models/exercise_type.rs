//! Exercise type entity model and DTOs.
//!
//! Exercise types are shared reference data: many exercises point at one
//! type, and a type is never owned by a single workout.

use planfit_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `exercise_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseType {
    pub id: DbId,
    /// Unique display name.
    pub name: String,
    /// 1–5 inclusive, enforced on create/update.
    pub complexity: i32,
}

/// DTO for creating a new exercise type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExerciseType {
    pub name: String,
    pub complexity: i32,
}

/// DTO for updating an exercise type. Full-field replacement.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExerciseType {
    pub name: String,
    pub complexity: i32,
}
