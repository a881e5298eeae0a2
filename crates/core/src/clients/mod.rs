//! Clients module - domain models, services, and traits.
//!
//! Contacts belong to clients (cascade on delete) and are managed here.

mod clients_model;
mod clients_service;
mod clients_traits;

#[cfg(test)]
mod clients_service_tests;

pub use clients_model::{Client, Contact, NewClient, NewContact};
pub use clients_service::ClientService;
pub use clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
