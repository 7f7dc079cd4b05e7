use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_active_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal>;
    /// Deletes the goal and every task referencing it.
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
}
