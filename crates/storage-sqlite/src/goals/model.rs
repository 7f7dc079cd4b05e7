//! Database models for goals.
//!
//! The table keeps the recurrence rule as a `goal_type` tag plus nullable
//! parameter columns; only the columns matching the tag are meaningful.
//! The conversions below materialize that loose shape into the
//! `GoalRecurrence` sum type and back, so nothing above the storage layer
//! ever touches a field whose meaning depends on the tag.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use niyyah_core::constants::DEFAULT_AMOUNT;
use niyyah_core::errors::{Error, Result, ValidationError};
use niyyah_core::goals::{Goal, GoalRecurrence, NewGoal};

pub const GOAL_TYPE_DIVISIBLE: &str = "divisible";
pub const GOAL_TYPE_WEEKLY: &str = "weekly";
pub const GOAL_TYPE_DAILY: &str = "daily";
pub const GOAL_TYPE_SPECIFIC_DAYS: &str = "specific_days";
pub const GOAL_TYPE_ONE_TIME: &str = "one_time";

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub unit: String,
    pub goal_type: String,
    pub total_amount: Option<i64>,
    pub daily_amount: Option<i64>,
    pub weekly_frequency: Option<i32>,
    /// JSON array of weekday indices 0..=6, Sunday = 0.
    pub weekly_days: Option<String>,
    /// JSON array of period day numbers (1-based).
    pub specific_days: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub unit: String,
    pub goal_type: String,
    pub total_amount: Option<i64>,
    pub daily_amount: Option<i64>,
    pub weekly_frequency: Option<i32>,
    pub weekly_days: Option<String>,
    pub specific_days: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Recurrence parameters flattened into their column shape.
struct RecurrenceColumns {
    goal_type: &'static str,
    total_amount: Option<i64>,
    daily_amount: Option<i64>,
    weekly_frequency: Option<i32>,
    weekly_days: Option<String>,
    specific_days: Option<String>,
}

fn recurrence_to_columns(recurrence: &GoalRecurrence) -> Result<RecurrenceColumns> {
    let mut columns = RecurrenceColumns {
        goal_type: GOAL_TYPE_DAILY,
        total_amount: None,
        daily_amount: None,
        weekly_frequency: None,
        weekly_days: None,
        specific_days: None,
    };
    match recurrence {
        GoalRecurrence::Divisible { total_amount } => {
            columns.goal_type = GOAL_TYPE_DIVISIBLE;
            columns.total_amount = Some(*total_amount);
        }
        GoalRecurrence::Weekly {
            weekly_days,
            weekly_frequency,
            daily_amount,
        } => {
            columns.goal_type = GOAL_TYPE_WEEKLY;
            columns.weekly_days = Some(serde_json::to_string(weekly_days)?);
            columns.weekly_frequency = weekly_frequency.map(|f| f as i32);
            columns.daily_amount = Some(*daily_amount);
        }
        GoalRecurrence::Daily { daily_amount } => {
            columns.goal_type = GOAL_TYPE_DAILY;
            columns.daily_amount = Some(*daily_amount);
        }
        GoalRecurrence::SpecificDays {
            specific_days,
            daily_amount,
        } => {
            columns.goal_type = GOAL_TYPE_SPECIFIC_DAYS;
            columns.specific_days = Some(serde_json::to_string(specific_days)?);
            columns.daily_amount = Some(*daily_amount);
        }
        GoalRecurrence::OneTime { total_amount } => {
            columns.goal_type = GOAL_TYPE_ONE_TIME;
            columns.total_amount = Some(*total_amount);
        }
    }
    Ok(columns)
}

fn parse_day_set(raw: Option<&str>) -> Result<Vec<u32>> {
    match raw {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(Vec::new()),
    }
}

// Conversion to domain models

impl TryFrom<GoalDB> for Goal {
    type Error = Error;

    fn try_from(db: GoalDB) -> Result<Goal> {
        let recurrence = match db.goal_type.as_str() {
            // Missing amounts degrade permissively: a divisible goal with no
            // total has nothing remaining and is simply never due.
            GOAL_TYPE_DIVISIBLE => GoalRecurrence::Divisible {
                total_amount: db.total_amount.unwrap_or(0),
            },
            GOAL_TYPE_WEEKLY => GoalRecurrence::Weekly {
                weekly_days: parse_day_set(db.weekly_days.as_deref())?,
                weekly_frequency: db.weekly_frequency.map(|f| f as u32),
                daily_amount: db.daily_amount.unwrap_or(DEFAULT_AMOUNT),
            },
            GOAL_TYPE_DAILY => GoalRecurrence::Daily {
                daily_amount: db.daily_amount.unwrap_or(DEFAULT_AMOUNT),
            },
            GOAL_TYPE_SPECIFIC_DAYS => GoalRecurrence::SpecificDays {
                specific_days: parse_day_set(db.specific_days.as_deref())?,
                daily_amount: db.daily_amount.unwrap_or(DEFAULT_AMOUNT),
            },
            GOAL_TYPE_ONE_TIME => GoalRecurrence::OneTime {
                total_amount: db.total_amount.unwrap_or(DEFAULT_AMOUNT),
            },
            other => {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "unknown goal type '{other}' for goal {}",
                    db.id
                ))))
            }
        };
        Ok(Goal {
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            unit: db.unit,
            recurrence,
            is_active: db.is_active,
        })
    }
}

impl NewGoalDB {
    pub fn from_domain(domain: NewGoal, now: String) -> Result<Self> {
        let columns = recurrence_to_columns(&domain.recurrence)?;
        Ok(Self {
            id: domain.id,
            user_id: domain.user_id,
            title: domain.title,
            unit: domain.unit,
            goal_type: columns.goal_type.to_string(),
            total_amount: columns.total_amount,
            daily_amount: columns.daily_amount,
            weekly_frequency: columns.weekly_frequency,
            weekly_days: columns.weekly_days,
            specific_days: columns.specific_days,
            is_active: domain.is_active,
            created_at: now.clone(),
            updated_at: now,
        })
    }
}
