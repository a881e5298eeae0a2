use log::debug;
use std::sync::Arc;

use super::clients_model::{Client, Contact, NewClient, NewContact};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::errors::Result;

/// Service for managing clients and their contacts.
pub struct ClientService {
    repository: Arc<dyn ClientRepositoryTrait>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ClientServiceTrait for ClientService {
    fn get_clients(&self) -> Result<Vec<Client>> {
        self.repository.list()
    }

    /// Fetches the full table (already ordered newest-first) and filters
    /// in-process: every term is matched as a case-insensitive substring of
    /// company name, sector, region, or location, ORed together.
    fn search_clients(&self, query: &str) -> Result<Vec<Client>> {
        let clients = self.repository.list()?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(clients);
        }
        Ok(clients
            .into_iter()
            .filter(|c| c.matches_query(&query))
            .collect())
    }

    fn get_client(&self, client_id: i32) -> Result<Client> {
        self.repository.get_by_id(client_id)
    }

    async fn create_client(&self, mut new_client: NewClient) -> Result<Client> {
        new_client.validate()?;
        debug!("Creating client '{}'", new_client.company_name);
        self.repository.insert(new_client).await
    }

    async fn delete_client(&self, client_id: i32) -> Result<usize> {
        self.repository.delete(client_id).await
    }

    fn get_contacts(&self, client_id: i32) -> Result<Vec<Contact>> {
        self.repository.list_contacts(client_id)
    }

    async fn add_contact(&self, mut new_contact: NewContact) -> Result<Contact> {
        new_contact.validate()?;
        self.repository.insert_contact(new_contact).await
    }
}
