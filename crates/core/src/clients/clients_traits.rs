use async_trait::async_trait;

use crate::clients::clients_model::{Client, Contact, NewClient, NewContact};
use crate::errors::Result;

/// Trait for client repository operations.
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    /// Loads all clients ordered by creation time, newest first.
    fn list(&self) -> Result<Vec<Client>>;
    fn get_by_id(&self, client_id: i32) -> Result<Client>;
    async fn insert(&self, new_client: NewClient) -> Result<Client>;
    /// Deletes a client; contacts cascade at the schema level.
    async fn delete(&self, client_id: i32) -> Result<usize>;
    fn list_contacts(&self, client_id: i32) -> Result<Vec<Contact>>;
    async fn insert_contact(&self, new_contact: NewContact) -> Result<Contact>;
}

/// Trait for client service operations.
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    fn get_clients(&self) -> Result<Vec<Client>>;
    /// Case-insensitive substring search across company name, sector,
    /// region, and location.
    fn search_clients(&self, query: &str) -> Result<Vec<Client>>;
    fn get_client(&self, client_id: i32) -> Result<Client>;
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;
    async fn delete_client(&self, client_id: i32) -> Result<usize>;
    fn get_contacts(&self, client_id: i32) -> Result<Vec<Contact>>;
    async fn add_contact(&self, new_contact: NewContact) -> Result<Contact>;
}
