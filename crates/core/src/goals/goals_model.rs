//! Goal domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AMOUNT;

/// Recurrence rule for a goal. Exactly one variant applies per goal;
/// each carries only the parameters its target rule reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "goalType", rename_all = "snake_case")]
pub enum GoalRecurrence {
    /// A fixed total spread dynamically across remaining days. Falling
    /// behind raises the daily pace for days not yet materialized.
    Divisible {
        #[serde(rename = "totalAmount")]
        total_amount: i64,
    },
    /// Due on certain weekdays. When `weekly_days` is non-empty it wins;
    /// otherwise `weekly_frequency` occurrences are spread deterministically
    /// across the week. Neither set means the goal is never due.
    Weekly {
        #[serde(rename = "weeklyDays", default)]
        weekly_days: Vec<u32>,
        #[serde(rename = "weeklyFrequency", default)]
        weekly_frequency: Option<u32>,
        #[serde(rename = "dailyAmount", default = "default_amount")]
        daily_amount: i64,
    },
    /// Due every day of the period.
    Daily {
        #[serde(rename = "dailyAmount", default = "default_amount")]
        daily_amount: i64,
    },
    /// Due on an explicit set of period day numbers (1-based).
    SpecificDays {
        #[serde(rename = "specificDays")]
        specific_days: Vec<u32>,
        #[serde(rename = "dailyAmount", default = "default_amount")]
        daily_amount: i64,
    },
    /// Due once, any day before the period ends.
    OneTime {
        #[serde(rename = "totalAmount", default = "default_amount")]
        total_amount: i64,
    },
}

fn default_amount() -> i64 {
    DEFAULT_AMOUNT
}

/// Domain model representing a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// Free-text label for the measured quantity (e.g. "pages").
    pub unit: String,
    #[serde(flatten)]
    pub recurrence: GoalRecurrence,
    /// Inactive goals are excluded from generation and progress totals but
    /// keep their historical tasks.
    pub is_active: bool,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub unit: String,
    #[serde(flatten)]
    pub recurrence: GoalRecurrence,
    pub is_active: bool,
}

/// Direct field updates on an existing goal (rename, relabel,
/// activate/deactivate). The recurrence rule is fixed at creation:
/// changing it mid-period would contradict targets already materialized
/// under the old rule.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub is_active: bool,
}
