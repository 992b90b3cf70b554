//! Pure domain logic for the workout planning service.
//!
//! No I/O lives here: the budget evaluator and validation helpers take
//! plain values and return plain results, so they are safely callable
//! from any number of threads without synchronization.

pub mod budget;
pub mod error;
pub mod types;
