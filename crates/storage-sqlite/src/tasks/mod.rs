mod model;
mod repository;

pub use model::{NewTaskDB, TaskDB};
pub use repository::TaskRepository;
