//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the rows its
//!   queries return (exercises always come back joined with their type)
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-field replacement

pub mod exercise;
pub mod exercise_type;
pub mod workout;
