mod model;
mod repository;

pub use model::{NewTrackerEntryDB, TrackerEntryDB};
pub use repository::TrackerRepository;
