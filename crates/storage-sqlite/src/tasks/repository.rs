use chrono::{NaiveDate, Utc};
use niyyah_core::tasks::{DailyTask, NewDailyTask, TaskRepositoryTrait};
use niyyah_core::Result;

use super::model::{DailyTaskDB, NewDailyTaskDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::daily_tasks;
use crate::schema::daily_tasks::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct TaskRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TaskRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TaskRepository { pool, writer }
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    fn load_tasks_for_user(&self, for_user_id: &str) -> Result<Vec<DailyTask>> {
        let mut conn = get_connection(&self.pool)?;
        let tasks_db = daily_tasks
            .filter(user_id.eq(for_user_id))
            .load::<DailyTaskDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(tasks_db.into_iter().map(DailyTask::from).collect())
    }

    fn load_tasks_for_goal(&self, for_goal_id: &str) -> Result<Vec<DailyTask>> {
        let mut conn = get_connection(&self.pool)?;
        let tasks_db = daily_tasks
            .filter(goal_id.eq(for_goal_id))
            .load::<DailyTaskDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(tasks_db.into_iter().map(DailyTask::from).collect())
    }

    fn load_tasks_for_date(&self, for_user_id: &str, on_date: NaiveDate) -> Result<Vec<DailyTask>> {
        let mut conn = get_connection(&self.pool)?;
        let tasks_db = daily_tasks
            .filter(user_id.eq(for_user_id))
            .filter(date.eq(on_date))
            .load::<DailyTaskDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(tasks_db.into_iter().map(DailyTask::from).collect())
    }

    fn get_task(&self, task_id: &str) -> Result<DailyTask> {
        let mut conn = get_connection(&self.pool)?;
        let task_db = daily_tasks
            .find(task_id)
            .first::<DailyTaskDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(DailyTask::from(task_db))
    }

    async fn insert_tasks(&self, drafts: Vec<NewDailyTask>) -> Result<Vec<DailyTask>> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<DailyTask>> {
                let now = Utc::now().to_rfc3339();
                let mut inserted = Vec::with_capacity(drafts.len());
                for draft in drafts {
                    let mut task_db = NewDailyTaskDB::from_domain(draft, now.clone());
                    task_db.id = Some(task_db.id.unwrap_or_else(|| Uuid::new_v4().to_string()));

                    let result_db = diesel::insert_into(daily_tasks::table)
                        .values(&task_db)
                        .returning(DailyTaskDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    inserted.push(DailyTask::from(result_db));
                }
                Ok(inserted)
            })
            .await
    }

    async fn update_task_progress(
        &self,
        task_id: &str,
        new_completed_amount: i64,
        new_is_completed: bool,
    ) -> Result<DailyTask> {
        let task_id_owned = task_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<DailyTask> {
                let result_db = diesel::update(daily_tasks.find(task_id_owned))
                    .set((
                        completed_amount.eq(new_completed_amount),
                        is_completed.eq(new_is_completed),
                        updated_at.eq(Utc::now().to_rfc3339()),
                    ))
                    .returning(DailyTaskDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(DailyTask::from(result_db))
            })
            .await
    }

    async fn delete_tasks_for_goal(&self, for_goal_id: &str) -> Result<usize> {
        let goal_id_owned = for_goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(daily_tasks.filter(goal_id.eq(goal_id_owned)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
