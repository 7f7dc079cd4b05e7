use niyyah_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use niyyah_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, for_user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals
            .filter(user_id.eq(for_user_id))
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        goals_db.into_iter().map(Goal::try_from).collect()
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Goal::try_from(goal_db)
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let now = Utc::now().to_rfc3339();
                let mut new_goal_db = NewGoalDB::from_domain(new_goal, now)?;
                new_goal_db.id = Some(
                    new_goal_db
                        .id
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                );

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(result_db)
            })
            .await
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let result_db = diesel::update(goals.find(goal_update.id.clone()))
                    .set((
                        title.eq(goal_update.title),
                        unit.eq(goal_update.unit),
                        is_active.eq(goal_update.is_active),
                        updated_at.eq(Utc::now().to_rfc3339()),
                    ))
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(result_db)
            })
            .await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(goals.find(goal_id_to_delete))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
