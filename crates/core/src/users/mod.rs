//! Users module - accounts, roles, and password authentication.

mod users_model;
mod users_service;
mod users_traits;


pub use users_model::{hash_password, AuthRecord, NewUser, SessionIdentity, User};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
