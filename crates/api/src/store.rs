//! The storage capability consumed by the mutation orchestrator.
//!
//! [`ExerciseStore`] is the narrow contract the orchestrator needs:
//! referential lookups, the budget-item projection of a workout's
//! exercise set, and the four writes. The production implementation
//! [`PgStore`] runs every method on one sqlx transaction, so a mutation's
//! load-evaluate-write sequence is atomic; tests substitute an in-memory
//! fake.

use async_trait::async_trait;
use planfit_core::budget::BudgetItem;
use planfit_core::types::DbId;
use planfit_db::models::exercise::{CreateExercise, ExerciseWithType, UpdateExercise};
use planfit_db::models::exercise_type::ExerciseType;
use planfit_db::models::workout::Workout;
use planfit_db::repositories::{ExerciseRepo, ExerciseTypeRepo, WorkoutRepo};
use planfit_db::DbPool;

use crate::error::AppError;

/// Read/write primitives for one exercise mutation.
#[async_trait]
pub trait ExerciseStore {
    /// Fetch a workout and reserve it against concurrent mutations for
    /// the remainder of the mutation.
    async fn workout_for_update(&mut self, id: DbId) -> Result<Option<Workout>, AppError>;

    async fn exercise_type(&mut self, id: DbId) -> Result<Option<ExerciseType>, AppError>;

    async fn exercise(&mut self, id: DbId) -> Result<Option<ExerciseWithType>, AppError>;

    /// The (complexity, time) contributions of a workout's exercises,
    /// optionally excluding one record (the one being replaced).
    async fn budget_items(
        &mut self,
        workout_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<BudgetItem>, AppError>;

    async fn insert_exercise(
        &mut self,
        input: &CreateExercise,
    ) -> Result<ExerciseWithType, AppError>;

    /// Replace description, type, time, and owning workout. `None` if
    /// the record vanished since it was read.
    async fn update_exercise(
        &mut self,
        id: DbId,
        input: &UpdateExercise,
        workout_id: DbId,
    ) -> Result<Option<ExerciseWithType>, AppError>;

    /// Reassign the owning workout only. `None` if the record vanished
    /// since it was read.
    async fn reassign_workout(
        &mut self,
        id: DbId,
        workout_id: DbId,
    ) -> Result<Option<ExerciseWithType>, AppError>;

    async fn delete_exercise(&mut self, id: DbId) -> Result<bool, AppError>;
}

/// Transaction-backed [`ExerciseStore`].
///
/// Every method runs on the same Postgres transaction; the workout row
/// lock taken by [`ExerciseStore::workout_for_update`] serializes
/// concurrent mutations against the same workout's exercise set. Dropping
/// the store without [`PgStore::commit`] rolls everything back.
pub struct PgStore {
    tx: sqlx::Transaction<'static, sqlx::Postgres>,
}

impl PgStore {
    /// Open a transaction on the pool.
    pub async fn begin(pool: &DbPool) -> Result<Self, AppError> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    /// Commit the mutation. Call only after the orchestrator admitted it.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl ExerciseStore for PgStore {
    async fn workout_for_update(&mut self, id: DbId) -> Result<Option<Workout>, AppError> {
        Ok(WorkoutRepo::find_by_id_for_update(&mut *self.tx, id).await?)
    }

    async fn exercise_type(&mut self, id: DbId) -> Result<Option<ExerciseType>, AppError> {
        Ok(ExerciseTypeRepo::find_by_id(&mut *self.tx, id).await?)
    }

    async fn exercise(&mut self, id: DbId) -> Result<Option<ExerciseWithType>, AppError> {
        Ok(ExerciseRepo::find_by_id(&mut *self.tx, id).await?)
    }

    async fn budget_items(
        &mut self,
        workout_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<BudgetItem>, AppError> {
        let exercises = ExerciseRepo::list_by_workout(&mut *self.tx, workout_id, exclude_id).await?;
        Ok(exercises.iter().map(ExerciseWithType::budget_item).collect())
    }

    async fn insert_exercise(
        &mut self,
        input: &CreateExercise,
    ) -> Result<ExerciseWithType, AppError> {
        Ok(ExerciseRepo::create(&mut *self.tx, input).await?)
    }

    async fn update_exercise(
        &mut self,
        id: DbId,
        input: &UpdateExercise,
        workout_id: DbId,
    ) -> Result<Option<ExerciseWithType>, AppError> {
        Ok(ExerciseRepo::update(&mut *self.tx, id, input, workout_id).await?)
    }

    async fn reassign_workout(
        &mut self,
        id: DbId,
        workout_id: DbId,
    ) -> Result<Option<ExerciseWithType>, AppError> {
        Ok(ExerciseRepo::set_workout(&mut *self.tx, id, workout_id).await?)
    }

    async fn delete_exercise(&mut self, id: DbId) -> Result<bool, AppError> {
        Ok(ExerciseRepo::delete(&mut *self.tx, id).await?)
    }
}
