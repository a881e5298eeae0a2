mod model;
mod repository;

pub use model::{MeetingDB, NewMeetingDB};
pub use repository::MeetingRepository;
