//! Progress aggregation.
//!
//! Denominators describe each goal's full intended scope over the period,
//! not the targets materialized so far, so percentages stay stable as days
//! elapse. The weekly denominator treats the period as exactly 4 weeks; that
//! is an approximation inherited from the product and deliberately kept,
//! since correcting it would change user-visible percentages.

use std::sync::Arc;

use super::progress_model::GoalProgress;
use super::progress_traits::ProgressServiceTrait;
use crate::constants::WEEKS_PER_PERIOD;
use crate::errors::Result;
use crate::goals::{Goal, GoalRecurrence, GoalRepositoryTrait};
use crate::period::Period;
use crate::tasks::{DailyTask, TaskRepositoryTrait};

/// The goal's full intended scope across the period.
pub fn goal_total(goal: &Goal, period: &Period) -> i64 {
    match &goal.recurrence {
        GoalRecurrence::Divisible { total_amount } => *total_amount,
        GoalRecurrence::OneTime { total_amount } => *total_amount,
        GoalRecurrence::Daily { daily_amount } => daily_amount * period.length_days as i64,
        GoalRecurrence::SpecificDays {
            specific_days,
            daily_amount,
        } => daily_amount * specific_days.len() as i64,
        GoalRecurrence::Weekly {
            weekly_days,
            weekly_frequency,
            daily_amount,
        } => {
            // With explicit days the day count stands in for the frequency.
            let frequency = weekly_frequency.unwrap_or(weekly_days.len() as u32);
            frequency as i64 * daily_amount * WEEKS_PER_PERIOD
        }
    }
}

/// Completion summary for one goal given all of its tasks. Every task's
/// `completed_amount` counts, whatever its completion flag says.
pub fn overall_progress(goal: &Goal, tasks: &[DailyTask], period: &Period) -> GoalProgress {
    let completed: i64 = tasks
        .iter()
        .filter(|t| t.goal_id == goal.id)
        .map(|t| t.completed_amount)
        .sum();
    GoalProgress::new(completed, goal_total(goal, period))
}

/// One blended percentage across the given goals. A goal with a zero total
/// contributes 0 to both sides rather than being excluded; tasks whose goal
/// is not in `goals` (e.g. the goal was deleted) are ignored.
pub fn total_progress(goals: &[Goal], tasks: &[DailyTask], period: &Period) -> GoalProgress {
    let mut completed = 0;
    let mut total = 0;
    for goal in goals {
        let p = overall_progress(goal, tasks, period);
        completed += p.completed;
        total += p.total;
    }
    GoalProgress::new(completed, total)
}

/// Service answering progress queries from the repositories.
pub struct ProgressService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    task_repository: Arc<dyn TaskRepositoryTrait>,
    period: Period,
}

impl ProgressService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        task_repository: Arc<dyn TaskRepositoryTrait>,
        period: Period,
    ) -> Self {
        ProgressService {
            goal_repository,
            task_repository,
            period,
        }
    }
}

impl ProgressServiceTrait for ProgressService {
    fn goal_progress(&self, goal_id: &str) -> Result<GoalProgress> {
        let goal = self.goal_repository.get_goal(goal_id)?;
        let tasks = self.task_repository.load_tasks_for_goal(goal_id)?;
        Ok(overall_progress(&goal, &tasks, &self.period))
    }

    fn user_progress(&self, user_id: &str) -> Result<GoalProgress> {
        let goals: Vec<Goal> = self
            .goal_repository
            .load_goals(user_id)?
            .into_iter()
            .filter(|g| g.is_active)
            .collect();
        let tasks = self.task_repository.load_tasks_for_user(user_id)?;
        Ok(total_progress(&goals, &tasks, &self.period))
    }
}
