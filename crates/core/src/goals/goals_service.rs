use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;
use crate::tasks::TaskRepositoryTrait;
use async_trait::async_trait;

/// Service for managing goal definitions.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    task_repository: Arc<dyn TaskRepositoryTrait>,
}

impl GoalService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        task_repository: Arc<dyn TaskRepositoryTrait>,
    ) -> Self {
        GoalService {
            goal_repository,
            task_repository,
        }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals(user_id)
    }

    fn get_active_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        Ok(self
            .goal_repository
            .load_goals(user_id)?
            .into_iter()
            .filter(|g| g.is_active)
            .collect())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repository.get_goal(goal_id)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        debug!(
            "Creating goal '{}' for user {}",
            new_goal.title, new_goal.user_id
        );
        self.goal_repository.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        self.goal_repository.update_goal(goal_update).await
    }

    /// Deletes a goal together with every task referencing it. Tasks are
    /// removed first so a failure midway never leaves tasks pointing at a
    /// goal that no longer exists.
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        let removed_tasks = self
            .task_repository
            .delete_tasks_for_goal(&goal_id_to_delete)
            .await?;
        debug!(
            "Deleting goal {} removed {} tasks",
            goal_id_to_delete, removed_tasks
        );
        self.goal_repository.delete_goal(goal_id_to_delete).await
    }
}
