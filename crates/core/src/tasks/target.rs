//! Daily target calculation.
//!
//! [`daily_target`] answers "how much of this goal is due on this date",
//! with 0 meaning "nothing - do not materialize a task". The function never
//! fails: out-of-range dates and partially configured goals degrade to a
//! zero target. The UI enforces required fields before a goal is persisted,
//! so a half-filled record here is treated as never due rather than invalid.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::constants::DAYS_PER_WEEK;
use crate::goals::{Goal, GoalRecurrence};
use crate::period::{day_of_week, Period};
use crate::tasks::tasks_model::DailyTask;

/// Quantity of `goal` due on `date`. `prior_tasks` may contain tasks for any
/// goal and any date; only this goal's tasks dated strictly before `date`
/// participate (and only for the divisible and one-time rules).
pub fn daily_target(
    goal: &Goal,
    date: NaiveDate,
    period: &Period,
    prior_tasks: &[DailyTask],
) -> i64 {
    let prior = || {
        prior_tasks
            .iter()
            .filter(move |t| t.goal_id == goal.id && t.date < date)
    };

    match &goal.recurrence {
        GoalRecurrence::Divisible { total_amount } => {
            let completed_so_far: i64 = prior().map(|t| t.completed_amount).sum();
            let remaining = total_amount - completed_so_far;
            let days_left = period.remaining_days(date);
            if remaining <= 0 || days_left <= 0 {
                return 0;
            }
            // Integer ceiling: falling behind on prior days raises the pace.
            (remaining + days_left - 1) / days_left
        }
        GoalRecurrence::Weekly {
            weekly_days,
            weekly_frequency,
            daily_amount,
        } => {
            let weekday = day_of_week(date);
            let due = if !weekly_days.is_empty() {
                weekly_days.contains(&weekday)
            } else if let Some(frequency) = weekly_frequency {
                weekday_set_for_frequency(*frequency).contains(&weekday)
            } else {
                false
            };
            if due {
                *daily_amount
            } else {
                0
            }
        }
        GoalRecurrence::Daily { daily_amount } => *daily_amount,
        GoalRecurrence::SpecificDays {
            specific_days,
            daily_amount,
        } => {
            let day = period.day_number(date);
            if day >= 1 && day <= u32::MAX as i64 && specific_days.contains(&(day as u32)) {
                *daily_amount
            } else {
                0
            }
        }
        GoalRecurrence::OneTime { total_amount } => {
            if prior().any(|t| t.is_completed) {
                0
            } else {
                *total_amount
            }
        }
    }
}

/// Spreads `frequency` occurrences evenly across the week:
/// `floor(i * 7 / frequency) mod 7` for each occurrence. The schedule is
/// deterministic and anchored to absolute weekday numbering, not to the
/// period start. Frequencies of 7 or more cover every weekday.
pub fn weekday_set_for_frequency(frequency: u32) -> BTreeSet<u32> {
    if frequency == 0 {
        return BTreeSet::new();
    }
    if frequency >= DAYS_PER_WEEK {
        return (0..DAYS_PER_WEEK).collect();
    }
    (0..frequency)
        .map(|i| (i * DAYS_PER_WEEK / frequency) % DAYS_PER_WEEK)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::GoalRecurrence;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period() -> Period {
        Period::ramadan(date(2025, 3, 1))
    }

    fn goal(recurrence: GoalRecurrence) -> Goal {
        Goal {
            id: "g1".to_string(),
            user_id: "u1".to_string(),
            title: "Read Quran".to_string(),
            unit: "pages".to_string(),
            recurrence,
            is_active: true,
        }
    }

    fn task(goal_id: &str, date: NaiveDate, completed: i64, is_completed: bool) -> DailyTask {
        DailyTask {
            id: format!("t-{date}"),
            goal_id: goal_id.to_string(),
            user_id: "u1".to_string(),
            date,
            target_amount: 1,
            completed_amount: completed,
            is_completed,
            carried_over_from: None,
        }
    }

    #[test]
    fn divisible_on_pace() {
        let g = goal(GoalRecurrence::Divisible { total_amount: 30 });
        assert_eq!(daily_target(&g, date(2025, 3, 1), &period(), &[]), 1);

        // One unit done on day 1, recomputing day 2: ceil(29/29) = 1
        let prior = vec![task("g1", date(2025, 3, 1), 1, true)];
        assert_eq!(daily_target(&g, date(2025, 3, 2), &period(), &prior), 1);
    }

    #[test]
    fn divisible_falling_behind_raises_target() {
        let g = goal(GoalRecurrence::Divisible { total_amount: 30 });
        // Day 1 skipped entirely: ceil(30/29) = 2 on day 2
        let prior = vec![task("g1", date(2025, 3, 1), 0, false)];
        assert_eq!(daily_target(&g, date(2025, 3, 2), &period(), &prior), 2);
    }

    #[test]
    fn divisible_exhausted_or_period_over_yields_zero() {
        let g = goal(GoalRecurrence::Divisible { total_amount: 10 });
        let done = vec![task("g1", date(2025, 3, 1), 10, true)];
        assert_eq!(daily_target(&g, date(2025, 3, 2), &period(), &done), 0);
        // after day 30 there are no remaining days
        assert_eq!(daily_target(&g, date(2025, 3, 31), &period(), &[]), 0);
        assert_eq!(daily_target(&g, date(2025, 4, 15), &period(), &[]), 0);
    }

    #[test]
    fn divisible_ignores_other_goals_history() {
        let g = goal(GoalRecurrence::Divisible { total_amount: 30 });
        let prior = vec![task("other", date(2025, 3, 1), 25, true)];
        // the other goal's completions must not shrink this goal's remainder
        assert_eq!(daily_target(&g, date(2025, 3, 2), &period(), &prior), 2);
    }

    #[test]
    fn weekly_explicit_days() {
        let g = goal(GoalRecurrence::Weekly {
            weekly_days: vec![1, 3, 5],
            weekly_frequency: None,
            daily_amount: 3,
        });
        // 2025-03-03 is a Monday, 2025-03-04 a Tuesday
        assert_eq!(daily_target(&g, date(2025, 3, 3), &period(), &[]), 3);
        assert_eq!(daily_target(&g, date(2025, 3, 4), &period(), &[]), 0);
        assert_eq!(daily_target(&g, date(2025, 3, 5), &period(), &[]), 3);
        assert_eq!(daily_target(&g, date(2025, 3, 7), &period(), &[]), 3);
    }

    #[test]
    fn weekly_explicit_days_win_over_frequency() {
        let g = goal(GoalRecurrence::Weekly {
            weekly_days: vec![2],
            weekly_frequency: Some(7),
            daily_amount: 1,
        });
        // Tuesday only, despite a frequency that would cover every day
        assert_eq!(daily_target(&g, date(2025, 3, 4), &period(), &[]), 1);
        assert_eq!(daily_target(&g, date(2025, 3, 3), &period(), &[]), 0);
    }

    #[test]
    fn weekly_frequency_distribution() {
        assert_eq!(
            weekday_set_for_frequency(2),
            BTreeSet::from([0, 3]),
            "twice a week lands on Sunday and Wednesday"
        );
        assert_eq!(weekday_set_for_frequency(3), BTreeSet::from([0, 2, 4]));
        assert_eq!(
            weekday_set_for_frequency(7),
            (0..7).collect::<BTreeSet<u32>>()
        );
        assert_eq!(
            weekday_set_for_frequency(10),
            (0..7).collect::<BTreeSet<u32>>()
        );
        assert!(weekday_set_for_frequency(0).is_empty());
    }

    #[test]
    fn weekly_without_days_or_frequency_is_never_due() {
        let g = goal(GoalRecurrence::Weekly {
            weekly_days: vec![],
            weekly_frequency: None,
            daily_amount: 5,
        });
        for day in 1..=30 {
            let d = period().date_for_day(day);
            assert_eq!(daily_target(&g, d, &period(), &[]), 0);
        }
    }

    #[test]
    fn daily_is_always_due() {
        let g = goal(GoalRecurrence::Daily { daily_amount: 4 });
        assert_eq!(daily_target(&g, date(2025, 3, 1), &period(), &[]), 4);
        assert_eq!(daily_target(&g, date(2025, 3, 30), &period(), &[]), 4);
    }

    #[test]
    fn specific_days_exactness() {
        let g = goal(GoalRecurrence::SpecificDays {
            specific_days: vec![1, 15, 30],
            daily_amount: 2,
        });
        for day in 1..=30 {
            let d = period().date_for_day(day);
            let expected = if [1, 15, 30].contains(&day) { 2 } else { 0 };
            assert_eq!(daily_target(&g, d, &period(), &[]), expected);
        }
        // before the period, day numbers are < 1
        assert_eq!(daily_target(&g, date(2025, 2, 20), &period(), &[]), 0);
    }

    #[test]
    fn one_time_exhausts_after_completion() {
        let g = goal(GoalRecurrence::OneTime { total_amount: 5 });
        assert_eq!(daily_target(&g, date(2025, 3, 2), &period(), &[]), 5);

        // an incomplete prior attempt does not exhaust the goal
        let incomplete = vec![task("g1", date(2025, 3, 2), 2, false)];
        assert_eq!(
            daily_target(&g, date(2025, 3, 10), &period(), &incomplete),
            5
        );

        // once completed anywhere, permanently 0 for every later date
        let completed = vec![task("g1", date(2025, 3, 2), 5, true)];
        for day in 3..=30 {
            let d = period().date_for_day(day);
            assert_eq!(daily_target(&g, d, &period(), &completed), 0);
        }
    }
}
