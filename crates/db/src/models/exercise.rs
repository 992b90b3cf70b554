//! Exercise entity model and DTOs.

use planfit_core::budget::BudgetItem;
use planfit_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An exercise joined with its type's name and complexity, the shape all
/// read endpoints return.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseWithType {
    pub id: DbId,
    /// Owning workout. Each exercise belongs to exactly one workout at a
    /// time; moving an exercise reassigns this field.
    pub workout_id: DbId,
    pub description: String,
    pub exercise_type_id: DbId,
    pub time_minutes: i32,
    pub exercise_type_name: String,
    pub complexity: i32,
}

impl ExerciseWithType {
    /// This exercise's contribution to its workout's budget.
    pub fn budget_item(&self) -> BudgetItem {
        BudgetItem {
            complexity: self.complexity,
            time_minutes: self.time_minutes,
        }
    }
}

/// DTO for creating a new exercise.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExercise {
    pub workout_id: DbId,
    pub description: String,
    pub exercise_type_id: DbId,
    pub time_minutes: i32,
}

/// DTO for updating an exercise. Description, type, and time are
/// required; `workout_id` may additionally be supplied to move the
/// exercise to another workout in the same mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExercise {
    pub description: String,
    pub exercise_type_id: DbId,
    pub time_minutes: i32,
    pub workout_id: Option<DbId>,
}

/// DTO for relocating an exercise to another workout.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveExercise {
    pub target_workout_id: DbId,
}
