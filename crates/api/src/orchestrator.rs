//! Mutation orchestrator for exercises.
//!
//! Create, update, and move all follow the same shape: resolve
//! references, build the prospective post-mutation set, evaluate it
//! against the workout's budget, and only then write. The three entry
//! points differ only in how the existing set and the candidate are
//! built; the evaluation itself is shared (`planfit_core::budget`), so
//! the three paths cannot drift apart.
//!
//! Callers are expected to run each entry point against a store scoped to
//! one transaction ([`crate::store::PgStore`]) and commit on success; on
//! any error the transaction is dropped and nothing is persisted.

use planfit_core::budget::{self, BudgetItem};
use planfit_core::error::CoreError;
use planfit_core::types::DbId;
use planfit_db::models::exercise::{CreateExercise, ExerciseWithType, UpdateExercise};

use crate::error::AppError;
use crate::store::ExerciseStore;

/// Create an exercise in a workout, gated by the budget check.
///
/// The existing set is everything currently in the workout; the
/// candidate contributes the type's complexity and the requested time.
pub async fn create_exercise<S: ExerciseStore>(
    store: &mut S,
    input: &CreateExercise,
) -> Result<ExerciseWithType, AppError> {
    budget::validate_description(&input.description)?;
    budget::validate_time_minutes(input.time_minutes)?;

    let workout = store
        .workout_for_update(input.workout_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id: input.workout_id,
        })?;
    let exercise_type = store
        .exercise_type(input.exercise_type_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Exercise type",
            id: input.exercise_type_id,
        })?;

    let existing = store.budget_items(workout.id, None).await?;
    let candidate = BudgetItem {
        complexity: exercise_type.complexity,
        time_minutes: input.time_minutes,
    };
    let verdict = budget::evaluate(&existing, candidate, workout.total_minutes());
    if !verdict.is_admitted() {
        return Err(CoreError::BudgetExceeded {
            reason: "Cannot add exercise",
            verdict,
        }
        .into());
    }

    store.insert_exercise(input).await
}

/// Update an exercise's description, type, and time, gated by the budget
/// check; supplying `workout_id` additionally moves it.
///
/// The existing set is the *target* workout's exercises excluding the
/// record itself: its old contribution is being replaced, and counting
/// it would double it. That exclusion is what makes a no-op update
/// against a workout already at its limit still succeed.
pub async fn update_exercise<S: ExerciseStore>(
    store: &mut S,
    id: DbId,
    input: &UpdateExercise,
) -> Result<ExerciseWithType, AppError> {
    budget::validate_description(&input.description)?;
    budget::validate_time_minutes(input.time_minutes)?;

    let current = store.exercise(id).await?.ok_or(CoreError::NotFound {
        entity: "Exercise",
        id,
    })?;
    let target_workout_id = input.workout_id.unwrap_or(current.workout_id);

    let workout = store
        .workout_for_update(target_workout_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id: target_workout_id,
        })?;
    let exercise_type = store
        .exercise_type(input.exercise_type_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Exercise type",
            id: input.exercise_type_id,
        })?;

    let existing = store.budget_items(workout.id, Some(id)).await?;
    let candidate = BudgetItem {
        complexity: exercise_type.complexity,
        time_minutes: input.time_minutes,
    };
    let verdict = budget::evaluate(&existing, candidate, workout.total_minutes());
    if !verdict.is_admitted() {
        return Err(CoreError::BudgetExceeded {
            reason: "Cannot update exercise",
            verdict,
        }
        .into());
    }

    store
        .update_exercise(id, input, workout.id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Exercise",
            id,
        }.into())
}

/// Relocate an exercise to another workout, gated by the target's budget.
///
/// Nothing about the exercise changes except ownership, so complexity
/// and time come from the record as it stands (its type looked up fresh
/// for the complexity). The record is not yet a member of the target, so
/// no self-exclusion applies.
pub async fn move_exercise<S: ExerciseStore>(
    store: &mut S,
    id: DbId,
    target_workout_id: DbId,
) -> Result<ExerciseWithType, AppError> {
    let exercise = store.exercise(id).await?.ok_or(CoreError::NotFound {
        entity: "Exercise",
        id,
    })?;
    let workout = store
        .workout_for_update(target_workout_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id: target_workout_id,
        })?;
    let exercise_type = store
        .exercise_type(exercise.exercise_type_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Exercise type",
            id: exercise.exercise_type_id,
        })?;

    let existing = store.budget_items(workout.id, None).await?;
    let candidate = BudgetItem {
        complexity: exercise_type.complexity,
        time_minutes: exercise.time_minutes,
    };
    let verdict = budget::evaluate(&existing, candidate, workout.total_minutes());
    if !verdict.is_admitted() {
        return Err(CoreError::BudgetExceeded {
            reason: "Cannot move exercise",
            verdict,
        }
        .into());
    }

    store
        .reassign_workout(id, workout.id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Exercise",
            id,
        }.into())
}

/// Delete an exercise unconditionally. Removal only relaxes the owning
/// workout's totals, so no budget check runs.
pub async fn delete_exercise<S: ExerciseStore>(store: &mut S, id: DbId) -> Result<(), AppError> {
    let deleted = store.delete_exercise(id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Exercise",
            id,
        }
        .into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use planfit_db::models::exercise_type::ExerciseType;
    use planfit_db::models::workout::Workout;
    use uuid::Uuid;

    use super::*;

    /// In-memory stand-in for the Postgres store.
    #[derive(Default)]
    struct MemStore {
        workouts: HashMap<DbId, Workout>,
        types: HashMap<DbId, ExerciseType>,
        exercises: Vec<ExerciseWithType>,
    }

    impl MemStore {
        fn add_workout(&mut self, hours: i32, minutes: i32) -> DbId {
            let id = Uuid::new_v4();
            self.workouts.insert(
                id,
                Workout {
                    id,
                    description: "workout".into(),
                    duration_hours: hours,
                    duration_minutes: minutes,
                },
            );
            id
        }

        fn add_type(&mut self, name: &str, complexity: i32) -> DbId {
            let id = Uuid::new_v4();
            self.types.insert(
                id,
                ExerciseType {
                    id,
                    name: name.into(),
                    complexity,
                },
            );
            id
        }

        /// Seed an exercise directly, bypassing the budget gate.
        fn add_exercise(&mut self, workout_id: DbId, type_id: DbId, time_minutes: i32) -> DbId {
            let ty = self.types.get(&type_id).expect("type must be seeded");
            let id = Uuid::new_v4();
            self.exercises.push(ExerciseWithType {
                id,
                workout_id,
                description: "exercise".into(),
                exercise_type_id: type_id,
                time_minutes,
                exercise_type_name: ty.name.clone(),
                complexity: ty.complexity,
            });
            id
        }

        fn find(&self, id: DbId) -> Option<&ExerciseWithType> {
            self.exercises.iter().find(|e| e.id == id)
        }
    }

    #[async_trait]
    impl ExerciseStore for MemStore {
        async fn workout_for_update(&mut self, id: DbId) -> Result<Option<Workout>, AppError> {
            Ok(self.workouts.get(&id).cloned())
        }

        async fn exercise_type(&mut self, id: DbId) -> Result<Option<ExerciseType>, AppError> {
            Ok(self.types.get(&id).cloned())
        }

        async fn exercise(&mut self, id: DbId) -> Result<Option<ExerciseWithType>, AppError> {
            Ok(self.find(id).cloned())
        }

        async fn budget_items(
            &mut self,
            workout_id: DbId,
            exclude_id: Option<DbId>,
        ) -> Result<Vec<BudgetItem>, AppError> {
            Ok(self
                .exercises
                .iter()
                .filter(|e| e.workout_id == workout_id && Some(e.id) != exclude_id)
                .map(ExerciseWithType::budget_item)
                .collect())
        }

        async fn insert_exercise(
            &mut self,
            input: &CreateExercise,
        ) -> Result<ExerciseWithType, AppError> {
            let ty = self
                .types
                .get(&input.exercise_type_id)
                .expect("orchestrator resolved the type first");
            let exercise = ExerciseWithType {
                id: Uuid::new_v4(),
                workout_id: input.workout_id,
                description: input.description.clone(),
                exercise_type_id: input.exercise_type_id,
                time_minutes: input.time_minutes,
                exercise_type_name: ty.name.clone(),
                complexity: ty.complexity,
            };
            self.exercises.push(exercise.clone());
            Ok(exercise)
        }

        async fn update_exercise(
            &mut self,
            id: DbId,
            input: &UpdateExercise,
            workout_id: DbId,
        ) -> Result<Option<ExerciseWithType>, AppError> {
            let ty = self
                .types
                .get(&input.exercise_type_id)
                .expect("orchestrator resolved the type first")
                .clone();
            let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == id) else {
                return Ok(None);
            };
            exercise.description = input.description.clone();
            exercise.exercise_type_id = input.exercise_type_id;
            exercise.time_minutes = input.time_minutes;
            exercise.workout_id = workout_id;
            exercise.exercise_type_name = ty.name;
            exercise.complexity = ty.complexity;
            Ok(Some(exercise.clone()))
        }

        async fn reassign_workout(
            &mut self,
            id: DbId,
            workout_id: DbId,
        ) -> Result<Option<ExerciseWithType>, AppError> {
            let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == id) else {
                return Ok(None);
            };
            exercise.workout_id = workout_id;
            Ok(Some(exercise.clone()))
        }

        async fn delete_exercise(&mut self, id: DbId) -> Result<bool, AppError> {
            let before = self.exercises.len();
            self.exercises.retain(|e| e.id != id);
            Ok(self.exercises.len() < before)
        }
    }

    fn create_input(workout_id: DbId, type_id: DbId, time_minutes: i32) -> CreateExercise {
        CreateExercise {
            workout_id,
            description: "Intervals".into(),
            exercise_type_id: type_id,
            time_minutes,
        }
    }

    fn expect_budget_exceeded(err: AppError) -> (&'static str, planfit_core::budget::BudgetVerdict) {
        match err {
            AppError::Core(CoreError::BudgetExceeded { reason, verdict }) => (reason, verdict),
            other => panic!("expected BudgetExceeded, got {other:?}"),
        }
    }

    fn expect_not_found(err: AppError, expected_entity: &str) {
        match err {
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                assert_eq!(entity, expected_entity);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    // -- create --

    #[tokio::test]
    async fn create_admitted_persists_joined_record() {
        let mut store = MemStore::default();
        let workout = store.add_workout(0, 45);
        let cardio = store.add_type("Cardio", 3);

        let created = create_exercise(&mut store, &create_input(workout, cardio, 30))
            .await
            .unwrap();

        assert_eq!(created.workout_id, workout);
        assert_eq!(created.exercise_type_name, "Cardio");
        assert_eq!(created.complexity, 3);
        assert_eq!(store.exercises.len(), 1);
    }

    #[tokio::test]
    async fn create_rejected_on_complexity_persists_nothing() {
        let mut store = MemStore::default();
        let workout = store.add_workout(2, 0);
        let heavy = store.add_type("Heavy", 5);
        store.add_exercise(workout, heavy, 10);
        let other = store.add_type("Other", 3);
        store.add_exercise(workout, other, 10);

        // 5 + 3 = 8 current; adding another 3 makes 11 > 10.
        let err = create_exercise(&mut store, &create_input(workout, other, 10))
            .await
            .unwrap_err();

        let (reason, verdict) = expect_budget_exceeded(err);
        assert_eq!(reason, "Cannot add exercise");
        assert!(verdict.complexity_exceeded);
        assert!(!verdict.time_exceeded);
        assert_eq!(verdict.current_total_complexity, 8);
        assert_eq!(verdict.new_total_complexity, 11);
        assert_eq!(store.exercises.len(), 2);
    }

    #[tokio::test]
    async fn create_rejected_on_time_persists_nothing() {
        let mut store = MemStore::default();
        let workout = store.add_workout(0, 45);
        let cardio = store.add_type("Cardio", 2);
        store.add_exercise(workout, cardio, 40);

        let err = create_exercise(&mut store, &create_input(workout, cardio, 6))
            .await
            .unwrap_err();

        let (_, verdict) = expect_budget_exceeded(err);
        assert!(verdict.time_exceeded);
        assert_eq!(verdict.new_total_time, 46);
        assert_eq!(verdict.workout_total_minutes, 45);
        assert_eq!(store.exercises.len(), 1);
    }

    #[tokio::test]
    async fn create_with_unknown_workout_is_not_found_and_writes_nothing() {
        let mut store = MemStore::default();
        let cardio = store.add_type("Cardio", 2);

        let err = create_exercise(&mut store, &create_input(Uuid::new_v4(), cardio, 10))
            .await
            .unwrap_err();

        expect_not_found(err, "Workout");
        assert!(store.exercises.is_empty());
    }

    #[tokio::test]
    async fn create_with_unknown_type_is_not_found() {
        let mut store = MemStore::default();
        let workout = store.add_workout(1, 0);

        let err = create_exercise(&mut store, &create_input(workout, Uuid::new_v4(), 10))
            .await
            .unwrap_err();

        expect_not_found(err, "Exercise type");
        assert!(store.exercises.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_description() {
        let mut store = MemStore::default();
        let workout = store.add_workout(1, 0);
        let cardio = store.add_type("Cardio", 2);
        let mut input = create_input(workout, cardio, 10);
        input.description = "  ".into();

        let err = create_exercise(&mut store, &input).await.unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_non_positive_time() {
        let mut store = MemStore::default();
        let workout = store.add_workout(1, 0);
        let cardio = store.add_type("Cardio", 2);

        let err = create_exercise(&mut store, &create_input(workout, cardio, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }

    // -- update --

    #[tokio::test]
    async fn update_excludes_itself_so_noop_edit_at_limit_succeeds() {
        let mut store = MemStore::default();
        // 45-minute workout filled exactly: complexity 5+5 = 10, time 30+15 = 45.
        let workout = store.add_workout(0, 45);
        let hard = store.add_type("Hard", 5);
        store.add_exercise(workout, hard, 30);
        let target = store.add_exercise(workout, hard, 15);

        // Re-submitting the same values must not double-count the record.
        let input = UpdateExercise {
            description: "unchanged".into(),
            exercise_type_id: hard,
            time_minutes: 15,
            workout_id: None,
        };
        let updated = update_exercise(&mut store, target, &input).await.unwrap();
        assert_eq!(updated.time_minutes, 15);
        assert_eq!(updated.workout_id, workout);
    }

    #[tokio::test]
    async fn update_rejection_leaves_record_untouched() {
        let mut store = MemStore::default();
        let workout = store.add_workout(0, 45);
        let cardio = store.add_type("Cardio", 2);
        store.add_exercise(workout, cardio, 30);
        let target = store.add_exercise(workout, cardio, 10);

        // 30 (other) + 20 (new) = 50 > 45.
        let input = UpdateExercise {
            description: "longer".into(),
            exercise_type_id: cardio,
            time_minutes: 20,
            workout_id: None,
        };
        let err = update_exercise(&mut store, target, &input).await.unwrap_err();

        let (reason, verdict) = expect_budget_exceeded(err);
        assert_eq!(reason, "Cannot update exercise");
        assert!(verdict.time_exceeded);
        assert_eq!(verdict.current_total_time, 30);
        assert_eq!(store.find(target).unwrap().time_minutes, 10);
    }

    #[tokio::test]
    async fn update_with_workout_id_moves_the_record() {
        let mut store = MemStore::default();
        let source = store.add_workout(1, 0);
        let dest = store.add_workout(1, 0);
        let cardio = store.add_type("Cardio", 2);
        let target = store.add_exercise(source, cardio, 20);

        let input = UpdateExercise {
            description: "relocated".into(),
            exercise_type_id: cardio,
            time_minutes: 20,
            workout_id: Some(dest),
        };
        let updated = update_exercise(&mut store, target, &input).await.unwrap();

        assert_eq!(updated.workout_id, dest);
        assert_eq!(store.find(target).unwrap().workout_id, dest);
    }

    #[tokio::test]
    async fn update_evaluates_against_the_target_workout() {
        let mut store = MemStore::default();
        let source = store.add_workout(2, 0);
        // Destination already holds 40 of its 45 minutes.
        let dest = store.add_workout(0, 45);
        let cardio = store.add_type("Cardio", 2);
        store.add_exercise(dest, cardio, 40);
        let target = store.add_exercise(source, cardio, 20);

        let input = UpdateExercise {
            description: "relocated".into(),
            exercise_type_id: cardio,
            time_minutes: 20,
            workout_id: Some(dest),
        };
        let err = update_exercise(&mut store, target, &input).await.unwrap_err();

        let (_, verdict) = expect_budget_exceeded(err);
        assert!(verdict.time_exceeded);
        assert_eq!(store.find(target).unwrap().workout_id, source);
    }

    #[tokio::test]
    async fn update_unknown_exercise_is_not_found() {
        let mut store = MemStore::default();
        store.add_workout(1, 0);
        let cardio = store.add_type("Cardio", 2);

        let input = UpdateExercise {
            description: "ghost".into(),
            exercise_type_id: cardio,
            time_minutes: 10,
            workout_id: None,
        };
        let err = update_exercise(&mut store, Uuid::new_v4(), &input)
            .await
            .unwrap_err();
        expect_not_found(err, "Exercise");
    }

    // -- move --

    #[tokio::test]
    async fn move_admitted_changes_ownership_only() {
        let mut store = MemStore::default();
        let source = store.add_workout(1, 0);
        let dest = store.add_workout(1, 0);
        let cardio = store.add_type("Cardio", 2);
        let target = store.add_exercise(source, cardio, 25);

        let moved = move_exercise(&mut store, target, dest).await.unwrap();

        assert_eq!(moved.workout_id, dest);
        assert_eq!(moved.time_minutes, 25);
        assert_eq!(moved.exercise_type_id, cardio);
        // Global contribution is conserved: one record, same item.
        assert_eq!(store.exercises.len(), 1);
    }

    #[tokio::test]
    async fn move_into_workout_at_its_limits_is_rejected() {
        let mut store = MemStore::default();
        let source = store.add_workout(2, 0);
        // Destination exactly at both limits: complexity 10, time 60 of 60.
        let dest = store.add_workout(1, 0);
        let heavy = store.add_type("Heavy", 5);
        store.add_exercise(dest, heavy, 30);
        store.add_exercise(dest, heavy, 30);
        let light = store.add_type("Light", 1);
        let target = store.add_exercise(source, light, 1);

        let err = move_exercise(&mut store, target, dest).await.unwrap_err();

        let (reason, verdict) = expect_budget_exceeded(err);
        assert_eq!(reason, "Cannot move exercise");
        assert!(verdict.complexity_exceeded);
        assert!(verdict.time_exceeded);
        assert_eq!(store.find(target).unwrap().workout_id, source);
    }

    #[tokio::test]
    async fn move_unknown_target_workout_is_not_found() {
        let mut store = MemStore::default();
        let source = store.add_workout(1, 0);
        let cardio = store.add_type("Cardio", 2);
        let target = store.add_exercise(source, cardio, 10);

        let err = move_exercise(&mut store, target, Uuid::new_v4())
            .await
            .unwrap_err();
        expect_not_found(err, "Workout");
        assert_eq!(store.find(target).unwrap().workout_id, source);
    }

    // -- delete --

    #[tokio::test]
    async fn delete_removes_the_record_without_budget_check() {
        let mut store = MemStore::default();
        // A workout already over budget (seeded directly) still allows
        // deletion: removal only relaxes totals.
        let workout = store.add_workout(0, 10);
        let heavy = store.add_type("Heavy", 5);
        store.add_exercise(workout, heavy, 30);
        let target = store.add_exercise(workout, heavy, 30);

        delete_exercise(&mut store, target).await.unwrap();
        assert!(store.find(target).is_none());
        assert_eq!(store.exercises.len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_exercise_is_not_found() {
        let mut store = MemStore::default();
        let err = delete_exercise(&mut store, Uuid::new_v4())
            .await
            .unwrap_err();
        expect_not_found(err, "Exercise");
    }
}
