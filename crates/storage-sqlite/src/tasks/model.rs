//! Database models for daily tasks.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;
use niyyah_core::tasks::{DailyTask, NewDailyTask};

/// Database model for daily tasks
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::daily_tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskDB {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub target_amount: i64,
    pub completed_amount: i64,
    pub is_completed: bool,
    pub carried_over_from: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for inserting a task
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_tasks)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyTaskDB {
    pub id: Option<String>,
    pub goal_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub target_amount: i64,
    pub completed_amount: i64,
    pub is_completed: bool,
    pub carried_over_from: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models

impl From<DailyTaskDB> for DailyTask {
    fn from(db: DailyTaskDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            user_id: db.user_id,
            date: db.date,
            target_amount: db.target_amount,
            completed_amount: db.completed_amount,
            is_completed: db.is_completed,
            carried_over_from: db.carried_over_from,
        }
    }
}

impl NewDailyTaskDB {
    pub fn from_domain(domain: NewDailyTask, now: String) -> Self {
        Self {
            id: domain.id,
            goal_id: domain.goal_id,
            user_id: domain.user_id,
            date: domain.date,
            target_amount: domain.target_amount,
            completed_amount: domain.completed_amount,
            is_completed: domain.is_completed,
            carried_over_from: domain.carried_over_from,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
