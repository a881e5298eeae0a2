//! Tasks & reminders module - domain models, services, and traits.

mod tasks_model;
mod tasks_service;
mod tasks_traits;

#[cfg(test)]
mod tasks_model_tests;

pub use tasks_model::{NewTask, Task, TaskFilters};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
