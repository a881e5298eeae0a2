#[cfg(test)]
mod tests {
    use crate::clients::{
        Client, ClientRepositoryTrait, ClientService, ClientServiceTrait, Contact, NewClient,
        NewContact,
    };
    use crate::errors::{Error, Result, ValidationError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // --- Mock ClientRepository ---
    struct MockClientRepository {
        clients: Arc<Mutex<Vec<Client>>>,
        contacts: Arc<Mutex<Vec<Contact>>>,
    }

    impl MockClientRepository {
        fn new() -> Self {
            Self {
                clients: Arc::new(Mutex::new(Vec::new())),
                contacts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn with_clients(clients: Vec<Client>) -> Self {
            Self {
                clients: Arc::new(Mutex::new(clients)),
                contacts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl ClientRepositoryTrait for MockClientRepository {
        fn list(&self) -> Result<Vec<Client>> {
            let mut clients = self.clients.lock().unwrap().clone();
            // Mirrors the repository ordering: newest first.
            clients.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(clients)
        }

        fn get_by_id(&self, client_id: i32) -> Result<Client> {
            self.clients
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == client_id)
                .cloned()
                .ok_or_else(|| Error::Unexpected("client not found".to_string()))
        }

        async fn insert(&self, new_client: NewClient) -> Result<Client> {
            let mut clients = self.clients.lock().unwrap();
            let client = Client {
                id: clients.len() as i32 + 1,
                company_name: new_client.company_name,
                sector: new_client.sector,
                region: new_client.region,
                location: new_client.location,
                size: new_client.size,
                revenue: new_client.revenue,
                potential_value: new_client.potential_value,
                notes: new_client.notes,
                created_at: "2025-06-01".to_string(),
            };
            clients.push(client.clone());
            Ok(client)
        }

        async fn delete(&self, client_id: i32) -> Result<usize> {
            let mut clients = self.clients.lock().unwrap();
            let before = clients.len();
            clients.retain(|c| c.id != client_id);
            self.contacts
                .lock()
                .unwrap()
                .retain(|c| c.client_id != client_id);
            Ok(before - clients.len())
        }

        fn list_contacts(&self, client_id: i32) -> Result<Vec<Contact>> {
            Ok(self
                .contacts
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.client_id == client_id)
                .cloned()
                .collect())
        }

        async fn insert_contact(&self, new_contact: NewContact) -> Result<Contact> {
            let mut contacts = self.contacts.lock().unwrap();
            let contact = Contact {
                id: contacts.len() as i32 + 1,
                client_id: new_contact.client_id,
                name: new_contact.name,
                designation: new_contact.designation,
                phone: new_contact.phone,
                email: new_contact.email,
                linkedin: new_contact.linkedin,
                created_at: "2025-06-01 09:00:00".to_string(),
            };
            contacts.push(contact.clone());
            Ok(contact)
        }
    }

    fn sample_client(id: i32, name: &str, region: &str, location: Option<&str>) -> Client {
        Client {
            id,
            company_name: name.to_string(),
            sector: Some("Power Generation".to_string()),
            region: Some(region.to_string()),
            location: location.map(|l| l.to_string()),
            size: Some("Medium".to_string()),
            revenue: 0.0,
            potential_value: 0.0,
            notes: None,
            created_at: format!("2025-05-{:02}", id),
        }
    }

    fn new_client(name: &str) -> NewClient {
        NewClient {
            company_name: name.to_string(),
            sector: Some("Power Generation".to_string()),
            region: Some("Ashanti".to_string()),
            location: None,
            size: None,
            revenue: 0.0,
            potential_value: 0.0,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_client_rejects_empty_company_name() {
        let repo = Arc::new(MockClientRepository::new());
        let service = ClientService::new(repo.clone());

        let result = service.create_client(new_client("   ")).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "company_name"
        ));
        // Validation happens before any statement: no row was written.
        assert!(repo.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_client_trims_and_inserts() {
        let service = ClientService::new(Arc::new(MockClientRepository::new()));
        let created = service
            .create_client(new_client("  Volta Aluminium  "))
            .await
            .unwrap();
        assert_eq!(created.company_name, "Volta Aluminium");

        let listed = service.get_clients().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].company_name, "Volta Aluminium");
    }

    #[test]
    fn search_matches_region_case_insensitively() {
        let repo = MockClientRepository::with_clients(vec![
            sample_client(1, "Tema Steel", "Greater Accra", Some("Tema")),
            sample_client(2, "Kumasi Foods", "Ashanti", None),
            sample_client(3, "Accra Mills", "Greater Accra", Some("Accra")),
        ]);
        let service = ClientService::new(Arc::new(repo));

        let hits = service.search_clients("greater accra").unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.region.as_deref() == Some("Greater Accra")));
    }

    #[test]
    fn search_treats_missing_location_as_empty() {
        let repo = MockClientRepository::with_clients(vec![
            sample_client(1, "Kumasi Foods", "Ashanti", None),
            sample_client(2, "Tema Steel", "Greater Accra", Some("Tema")),
        ]);
        let service = ClientService::new(Arc::new(repo));

        // A location-only term must not panic on NULL locations and must
        // still match rows whose location contains it.
        let hits = service.search_clients("tema").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company_name, "Tema Steel");
    }

    #[test]
    fn blank_query_returns_everything_newest_first() {
        let repo = MockClientRepository::with_clients(vec![
            sample_client(1, "Oldest", "Ashanti", None),
            sample_client(3, "Newest", "Ashanti", None),
            sample_client(2, "Middle", "Ashanti", None),
        ]);
        let service = ClientService::new(Arc::new(repo));

        let all = service.search_clients("  ").unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].company_name, "Newest");
    }

    #[tokio::test]
    async fn contact_requires_name() {
        let service = ClientService::new(Arc::new(MockClientRepository::new()));
        let result = service
            .add_contact(NewContact {
                client_id: 1,
                name: "".to_string(),
                designation: None,
                phone: None,
                email: None,
                linkedin: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "name"
        ));
    }
}
