use crate::errors::Result;
use crate::progress::progress_model::GoalProgress;

/// Trait for progress aggregation operations
pub trait ProgressServiceTrait: Send + Sync {
    /// Completion summary for one goal across the whole period.
    fn goal_progress(&self, goal_id: &str) -> Result<GoalProgress>;

    /// Blended summary across all of the user's active goals.
    fn user_progress(&self, user_id: &str) -> Result<GoalProgress>;
}
