//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take `impl PgExecutor` as the first argument so the same
//! queries run directly on the pool for plain reads and inside a
//! transaction for the gated mutation path.

pub mod exercise_repo;
pub mod exercise_type_repo;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepo;
pub use exercise_type_repo::ExerciseTypeRepo;
pub use workout_repo::WorkoutRepo;
