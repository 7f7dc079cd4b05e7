use log::debug;
use std::sync::Arc;

use chrono::NaiveDate;

use super::carry_over::{carry_over_draft, CarryOverPolicy};
use super::generator;
use super::tasks_model::{DailyTask, TaskUpdateRejected};
use super::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::GoalRepositoryTrait;
use crate::period::Period;
use async_trait::async_trait;

/// Service orchestrating task materialization, progress updates, and
/// carry-over against the repositories.
///
/// Generation reads the existing task history to completion before deciding
/// what to insert; the read and the insert are one logical unit but not a
/// storage transaction. Two concurrent sessions can therefore race to the
/// same (goal, date) pair - the storage layer's uniqueness index is the
/// backstop for that.
pub struct TaskService {
    task_repository: Arc<dyn TaskRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    period: Period,
}

impl TaskService {
    pub fn new(
        task_repository: Arc<dyn TaskRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        period: Period,
    ) -> Self {
        TaskService {
            task_repository,
            goal_repository,
            period,
        }
    }

    fn active_goals(&self, user_id: &str) -> Result<Vec<crate::goals::Goal>> {
        Ok(self
            .goal_repository
            .load_goals(user_id)?
            .into_iter()
            .filter(|g| g.is_active)
            .collect())
    }
}

#[async_trait]
impl TaskServiceTrait for TaskService {
    async fn generate_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<DailyTask>> {
        let goals = self.active_goals(user_id)?;
        let existing = self.task_repository.load_tasks_for_user(user_id)?;
        let drafts = generator::materialize_for_date(&goals, date, &self.period, &existing);
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            "Generating {} tasks for user {} on {}",
            drafts.len(),
            user_id,
            date
        );
        self.task_repository.insert_tasks(drafts).await
    }

    async fn backfill(&self, user_id: &str, today: NaiveDate) -> Result<Vec<DailyTask>> {
        let goals = self.active_goals(user_id)?;
        let existing = self.task_repository.load_tasks_for_user(user_id)?;
        let drafts = generator::backfill(&goals, today, &self.period, &existing);
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            "Backfilling {} tasks for user {} through {}",
            drafts.len(),
            user_id,
            today
        );
        self.task_repository.insert_tasks(drafts).await
    }

    fn get_tasks_for_date(&self, user_id: &str, date: NaiveDate) -> Result<Vec<DailyTask>> {
        self.task_repository.load_tasks_for_date(user_id, date)
    }

    fn get_tasks_for_goal(&self, goal_id: &str) -> Result<Vec<DailyTask>> {
        self.task_repository.load_tasks_for_goal(goal_id)
    }

    async fn update_task_progress(
        &self,
        task_id: &str,
        completed_amount: i64,
        is_completed: bool,
    ) -> std::result::Result<DailyTask, Box<TaskUpdateRejected>> {
        // Read the current state first so a failed write can still hand the
        // caller something to roll back to.
        let current = self.task_repository.get_task(task_id).map_err(|e| {
            Box::new(TaskUpdateRejected {
                task_id: task_id.to_string(),
                last_known: None,
                source: e,
            })
        })?;

        if completed_amount < 0 {
            return Err(Box::new(TaskUpdateRejected {
                task_id: task_id.to_string(),
                last_known: Some(current),
                source: Error::Validation(ValidationError::InvalidInput(
                    "completed_amount must be non-negative".to_string(),
                )),
            }));
        }

        self.task_repository
            .update_task_progress(task_id, completed_amount, is_completed)
            .await
            .map_err(|e| {
                Box::new(TaskUpdateRejected {
                    task_id: task_id.to_string(),
                    last_known: Some(current),
                    source: e,
                })
            })
    }

    async fn carry_over(&self, task_id: &str, policy: CarryOverPolicy) -> Result<DailyTask> {
        let task = self.task_repository.get_task(task_id)?;
        if self.period.day_number(task.date) >= self.period.length_days as i64 {
            return Err(Error::Task(format!(
                "task on {} is on or past the period's last day; there is no next day to carry into",
                task.date
            )));
        }
        let draft = carry_over_draft(&task, policy);
        let inserted = self.task_repository.insert_tasks(vec![draft]).await?;
        inserted
            .into_iter()
            .next()
            .ok_or_else(|| Error::Unexpected("carry-over insert returned no task".to_string()))
    }
}
