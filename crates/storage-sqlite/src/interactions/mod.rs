mod model;
mod repository;

pub use model::{InteractionDB, NewInteractionDB};
pub use repository::InteractionRepository;
