mod model;
mod repository;

pub use model::{ClientDB, ContactDB, NewClientDB, NewContactDB};
pub use repository::ClientRepository;
