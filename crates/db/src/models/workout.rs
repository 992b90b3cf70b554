//! Workout entity model and DTOs.

use planfit_core::budget;
use planfit_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `workouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workout {
    pub id: DbId,
    pub description: String,
    pub duration_hours: i32,
    pub duration_minutes: i32,
}

impl Workout {
    /// The workout's time budget in minutes. Minutes above 59 are kept
    /// as stored, not folded into hours.
    pub fn total_minutes(&self) -> i64 {
        budget::total_minutes(self.duration_hours, self.duration_minutes)
    }
}

/// DTO for creating a new workout.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkout {
    pub description: String,
    pub duration_hours: i32,
    pub duration_minutes: i32,
}

/// DTO for updating a workout. All fields are required; PUT replaces the
/// full row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkout {
    pub description: String,
    pub duration_hours: i32,
    pub duration_minutes: i32,
}
