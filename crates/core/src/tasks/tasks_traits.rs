use chrono::NaiveDate;

use crate::errors::Result;
use crate::tasks::carry_over::CarryOverPolicy;
use crate::tasks::tasks_model::{DailyTask, NewDailyTask, TaskUpdateRejected};
use async_trait::async_trait;

/// Trait for task repository operations
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    fn load_tasks_for_user(&self, user_id: &str) -> Result<Vec<DailyTask>>;
    fn load_tasks_for_goal(&self, goal_id: &str) -> Result<Vec<DailyTask>>;
    fn load_tasks_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<DailyTask>>;
    fn get_task(&self, task_id: &str) -> Result<DailyTask>;
    async fn insert_tasks(&self, drafts: Vec<NewDailyTask>) -> Result<Vec<DailyTask>>;
    /// Full-value overwrite of a task's progress fields; safe to retry with
    /// the same values.
    async fn update_task_progress(
        &self,
        task_id: &str,
        completed_amount: i64,
        is_completed: bool,
    ) -> Result<DailyTask>;
    async fn delete_tasks_for_goal(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for task service operations
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    /// Materializes and persists tasks for a single date. Returns only the
    /// newly inserted tasks; calling it again for the same date inserts
    /// nothing.
    async fn generate_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<DailyTask>>;

    /// Materializes and persists tasks for every elapsed period day up to
    /// `today` (clamped to the period's last day).
    async fn backfill(&self, user_id: &str, today: NaiveDate) -> Result<Vec<DailyTask>>;

    fn get_tasks_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<DailyTask>>;
    fn get_tasks_for_goal(&self, goal_id: &str) -> Result<Vec<DailyTask>>;

    /// Overwrites a task's progress. On failure the rejection carries the
    /// last state the store confirmed, so optimistic UI edits can revert.
    async fn update_task_progress(
        &self,
        task_id: &str,
        completed_amount: i64,
        is_completed: bool,
    ) -> std::result::Result<DailyTask, Box<TaskUpdateRejected>>;

    /// Inserts a forward task on the day after the given task's date,
    /// leaving the original untouched. Rejected for tasks on the period's
    /// last day.
    async fn carry_over(&self, task_id: &str, policy: CarryOverPolicy) -> Result<DailyTask>;
}
