//! Idempotent task materialization.
//!
//! Both entry points diff "goals that should have a task" against "tasks that
//! already exist" and return only the missing drafts. They never mutate the
//! store themselves; [`TaskService`](crate::tasks::TaskService) persists the
//! result. Re-running either function with its own output folded into
//! `existing_tasks` produces nothing, which is what makes a failed or
//! abandoned generation pass safe to retry wholesale.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::goals::Goal;
use crate::period::Period;
use crate::tasks::target::daily_target;
use crate::tasks::tasks_model::{DailyTask, NewDailyTask};

/// Single-date mode: drafts for every active goal due on `date` that has no
/// task for that date yet. Existing (goal, date) pairs are skipped no matter
/// how they came to exist - organic generation, backfill, or carry-over.
/// Dates outside the period produce nothing.
pub fn materialize_for_date(
    goals: &[Goal],
    date: NaiveDate,
    period: &Period,
    existing_tasks: &[DailyTask],
) -> Vec<NewDailyTask> {
    if !period.contains(date) {
        return Vec::new();
    }

    let covered: HashSet<(&str, NaiveDate)> = existing_tasks
        .iter()
        .map(|t| (t.goal_id.as_str(), t.date))
        .collect();

    let mut drafts = Vec::new();
    for goal in goals.iter().filter(|g| g.is_active) {
        if covered.contains(&(goal.id.as_str(), date)) {
            continue;
        }
        let target = daily_target(goal, date, period, existing_tasks);
        if target > 0 {
            drafts.push(NewDailyTask::organic(goal, date, target));
        }
    }
    drafts
}

/// Backfill mode: drafts for every date from period day 1 through
/// min(`today`, last day), in ascending order. The working set of prior
/// tasks is carried forward through the fold and extended with each date's
/// drafts, so a later date's divisible math sees tasks synthesized earlier
/// in the same pass, not just rows that were already persisted.
pub fn backfill(
    goals: &[Goal],
    today: NaiveDate,
    period: &Period,
    existing_tasks: &[DailyTask],
) -> Vec<NewDailyTask> {
    let last_day = period.day_number(today).min(period.length_days as i64);
    if last_day < 1 {
        return Vec::new();
    }

    let mut working_set: Vec<DailyTask> = existing_tasks.to_vec();
    let mut drafts = Vec::new();
    for day in 1..=last_day {
        let date = period.date_for_day(day);
        for draft in materialize_for_date(goals, date, period, &working_set) {
            working_set.push(DailyTask::from(draft.clone()));
            drafts.push(draft);
        }
    }
    drafts
}
