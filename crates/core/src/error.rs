use crate::budget::BudgetVerdict;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The mutation would push a workout past its complexity or time
    /// budget. Carries the full evaluator verdict so callers can render
    /// itemized diagnostics.
    #[error("{reason}")]
    BudgetExceeded {
        reason: &'static str,
        verdict: BudgetVerdict,
    },
}
