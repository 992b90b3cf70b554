//! HTTP request handlers, one module per resource.

pub mod exercise_types;
pub mod exercises;
pub mod workouts;
