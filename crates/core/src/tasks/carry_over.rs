//! Carry-over: deferring an incomplete task's obligation to the next day.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::tasks::tasks_model::{DailyTask, NewDailyTask};

/// How much of the original obligation moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarryOverPolicy {
    /// Carry the full original target, ignoring partial completion.
    Whole,
    /// Carry only the unfinished portion.
    Remainder,
}

/// Builds the forward task for the day after `task.date`. The original task
/// is not modified; whatever partial progress it holds stays on it, and
/// adjusting its status is the caller's separate operation.
pub fn carry_over_draft(task: &DailyTask, policy: CarryOverPolicy) -> NewDailyTask {
    let target_amount = match policy {
        CarryOverPolicy::Whole => task.target_amount,
        CarryOverPolicy::Remainder => (task.target_amount - task.completed_amount).max(0),
    };
    NewDailyTask {
        id: None,
        goal_id: task.goal_id.clone(),
        user_id: task.user_id.clone(),
        date: task.date + Duration::days(1),
        target_amount,
        completed_amount: 0,
        is_completed: false,
        carried_over_from: Some(task.date),
    }
}
