//! Daily task domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::Error;
use crate::goals::Goal;

/// One day's materialized instance of a goal.
///
/// `completed_amount` and `is_completed` are stored independently; callers
/// set them together but no invariant ties them at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTask {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    /// Quantity due on this date, fixed at generation time. Later
    /// recalculation of a divisible goal only affects not-yet-generated days.
    pub target_amount: i64,
    pub completed_amount: i64,
    pub is_completed: bool,
    /// Date of the task this one was carried over from; `None` for
    /// organically generated tasks.
    pub carried_over_from: Option<NaiveDate>,
}

/// Input model for a task about to be inserted. The id is assigned by the
/// repository at insert time when not supplied.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyTask {
    pub id: Option<String>,
    pub goal_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub target_amount: i64,
    pub completed_amount: i64,
    pub is_completed: bool,
    pub carried_over_from: Option<NaiveDate>,
}

impl NewDailyTask {
    /// Draft for an organically generated task: nothing completed yet, no
    /// carry-over provenance.
    pub fn organic(goal: &Goal, date: NaiveDate, target_amount: i64) -> Self {
        Self {
            id: None,
            goal_id: goal.id.clone(),
            user_id: goal.user_id.clone(),
            date,
            target_amount,
            completed_amount: 0,
            is_completed: false,
            carried_over_from: None,
        }
    }
}

impl From<NewDailyTask> for DailyTask {
    /// Provisional view of a draft, used by the backfill fold so tasks
    /// synthesized for earlier dates are visible to later dates in the same
    /// pass before anything is persisted.
    fn from(draft: NewDailyTask) -> Self {
        DailyTask {
            id: draft.id.unwrap_or_default(),
            goal_id: draft.goal_id,
            user_id: draft.user_id,
            date: draft.date,
            target_amount: draft.target_amount,
            completed_amount: draft.completed_amount,
            is_completed: draft.is_completed,
            carried_over_from: draft.carried_over_from,
        }
    }
}

/// A progress update that could not be applied. Carries the last state the
/// store confirmed so an optimistic UI edit can be rolled back, instead of
/// signalling rollback through exception-style control flow.
#[derive(Error, Debug)]
#[error("progress update for task {task_id} was not applied: {source}")]
pub struct TaskUpdateRejected {
    pub task_id: String,
    /// Last persisted state, when it could still be read.
    pub last_known: Option<DailyTask>,
    #[source]
    pub source: Error,
}
