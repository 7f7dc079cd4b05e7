//! SQLite storage implementation for daily tasks.

mod model;
mod repository;

pub use model::{DailyTaskDB, NewDailyTaskDB};
pub use repository::TaskRepository;
