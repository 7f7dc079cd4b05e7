//! Progress domain models.

use serde::{Deserialize, Serialize};

/// Completion summary for one goal, or blended across many.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Units completed across all materialized tasks, all dates.
    pub completed: i64,
    /// The goal's full intended scope over the whole period - not the sum of
    /// already-materialized task targets.
    pub total: i64,
    /// Always within 0..=100; over-completion clamps at 100.
    pub percentage: u32,
}

impl GoalProgress {
    pub fn new(completed: i64, total: i64) -> Self {
        Self {
            completed,
            total,
            percentage: percentage_of(completed, total),
        }
    }
}

/// `min(100, round(100 * completed / total))`, 0 when the total is 0.
pub fn percentage_of(completed: i64, total: i64) -> u32 {
    if total <= 0 {
        return 0;
    }
    let pct = (100.0 * completed as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u32
}
