//! Tasks module - daily task models, target calculation, generation,
//! carry-over, services, and traits.

mod carry_over;
mod generator;
mod target;
mod tasks_model;
mod tasks_service;
mod tasks_traits;


pub use carry_over::{carry_over_draft, CarryOverPolicy};
pub use generator::{backfill, materialize_for_date};
pub use target::{daily_target, weekday_set_for_frequency};
pub use tasks_model::{DailyTask, NewDailyTask, TaskUpdateRejected};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
