//! Workout budget constants, types, and pure evaluation logic.
//!
//! A workout admits an exercise mutation only while two aggregate limits
//! hold: total complexity of its exercises stays at or under a fixed
//! ceiling, and total exercise time stays at or under the workout's
//! configured duration. [`evaluate`] recomputes both aggregates for a
//! candidate set and reports a verdict with the full diagnostic breakdown.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum total complexity a single workout may carry. Fixed, not
/// configurable.
pub const COMPLEXITY_CEILING: i64 = 10;

/// Lowest complexity an exercise type may declare.
pub const MIN_TYPE_COMPLEXITY: i32 = 1;
/// Highest complexity an exercise type may declare.
pub const MAX_TYPE_COMPLEXITY: i32 = 5;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Minutes per hour (60).
pub const MINUTES_PER_HOUR: i64 = 60;

/// Total budget minutes for a workout duration of `hours` and `minutes`.
///
/// `minutes` is deliberately not normalized to `< 60`: a workout stored
/// as 0h90m budgets 90 minutes, the same as 1h30m. The result is `i64`
/// so the largest storable duration cannot wrap.
pub fn total_minutes(hours: i32, minutes: i32) -> i64 {
    i64::from(hours) * MINUTES_PER_HOUR + i64::from(minutes)
}

// ---------------------------------------------------------------------------
// Budget types
// ---------------------------------------------------------------------------

/// The (complexity, time) contribution of one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetItem {
    pub complexity: i32,
    pub time_minutes: i32,
}

/// Aggregate sums over a set of [`BudgetItem`]s.
///
/// Per-item values are `i32`; sums are carried in `i64` so no set of
/// storable rows can overflow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetTotals {
    pub complexity: i64,
    pub time_minutes: i64,
}

/// Admit/reject decision for a candidate exercise, with the diagnostic
/// figures callers need to render an actionable rejection.
///
/// Serializes camelCase: the rejection payload exposed over HTTP carries
/// these fields verbatim next to an `error` reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVerdict {
    pub current_total_complexity: i64,
    pub new_total_complexity: i64,
    pub current_total_time: i64,
    pub new_total_time: i64,
    pub workout_total_minutes: i64,
    pub complexity_exceeded: bool,
    pub time_exceeded: bool,
}

impl BudgetVerdict {
    /// Whether the candidate is admitted. Both limit checks are computed
    /// independently; admission requires both to hold.
    pub fn is_admitted(&self) -> bool {
        !self.complexity_exceeded && !self.time_exceeded
    }
}

// ---------------------------------------------------------------------------
// Evaluation logic
// ---------------------------------------------------------------------------

/// Sum complexity and time over a set of budget items.
pub fn totals(items: &[BudgetItem]) -> BudgetTotals {
    BudgetTotals {
        complexity: items.iter().map(|i| i64::from(i.complexity)).sum(),
        time_minutes: items.iter().map(|i| i64::from(i.time_minutes)).sum(),
    }
}

/// Evaluate a candidate exercise against a workout budget.
///
/// `existing` is the workout's exercise set *excluding* the item under
/// consideration (callers replacing a record must exclude it themselves,
/// or its contribution is counted twice). Both checks use strict `>`:
/// landing exactly on a limit admits.
pub fn evaluate(
    existing: &[BudgetItem],
    candidate: BudgetItem,
    workout_total_minutes: i64,
) -> BudgetVerdict {
    let current = totals(existing);
    let new_total_complexity = current.complexity + i64::from(candidate.complexity);
    let new_total_time = current.time_minutes + i64::from(candidate.time_minutes);

    BudgetVerdict {
        current_total_complexity: current.complexity,
        new_total_complexity,
        current_total_time: current.time_minutes,
        new_total_time,
        workout_total_minutes,
        complexity_exceeded: new_total_complexity > COMPLEXITY_CEILING,
        time_exceeded: new_total_time > workout_total_minutes,
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate an exercise type's declared complexity (1–5 inclusive).
pub fn validate_complexity(complexity: i32) -> Result<(), CoreError> {
    if !(MIN_TYPE_COMPLEXITY..=MAX_TYPE_COMPLEXITY).contains(&complexity) {
        return Err(CoreError::Validation(format!(
            "Complexity must be between {MIN_TYPE_COMPLEXITY} and {MAX_TYPE_COMPLEXITY}"
        )));
    }
    Ok(())
}

/// Validate an exercise's time in minutes (strictly positive).
pub fn validate_time_minutes(time_minutes: i32) -> Result<(), CoreError> {
    if time_minutes <= 0 {
        return Err(CoreError::Validation(
            "time_minutes must be greater than zero".into(),
        ));
    }
    Ok(())
}

/// Validate a workout duration. Hours and minutes must each be
/// non-negative; minutes above 59 are allowed (see [`total_minutes`]).
pub fn validate_duration(hours: i32, minutes: i32) -> Result<(), CoreError> {
    if hours < 0 || minutes < 0 {
        return Err(CoreError::Validation(
            "duration_hours and duration_minutes must be non-negative".into(),
        ));
    }
    Ok(())
}

/// Validate a required free-text description.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation("description must not be empty".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
