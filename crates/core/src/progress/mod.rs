//! Progress module - completion aggregation across tasks and goals.

mod progress_model;
mod progress_service;
mod progress_traits;

pub use progress_model::{percentage_of, GoalProgress};
pub use progress_service::{goal_total, overall_progress, total_progress, ProgressService};
pub use progress_traits::ProgressServiceTrait;
