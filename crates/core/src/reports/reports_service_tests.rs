#[cfg(test)]
mod tests {
    use crate::campaigns::{
        Campaign, CampaignRepositoryTrait, Lead, LeadFilters, LeadRepositoryTrait, NewCampaign,
        NewLead,
    };
    use crate::errors::Result;
    use crate::filters::InteractionFilters;
    use crate::interactions::{
        Interaction, InteractionRepositoryTrait, InteractionWithClient, NewInteraction,
    };
    use crate::reports::{
        NewTrackerEntry, ReportsService, ReportsServiceTrait, TrackerEntry,
        TrackerRepositoryTrait,
    };
    use crate::users::{AuthRecord, User, UserRepositoryTrait};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct StubInteractions(Vec<InteractionWithClient>);

    #[async_trait]
    impl InteractionRepositoryTrait for StubInteractions {
        fn list_filtered(
            &self,
            _filters: &InteractionFilters,
        ) -> Result<Vec<InteractionWithClient>> {
            Ok(self.0.clone())
        }

        async fn insert(&self, _new: NewInteraction) -> Result<InteractionWithClient> {
            unimplemented!()
        }
    }

    struct StubCampaigns(Vec<Campaign>);

    #[async_trait]
    impl CampaignRepositoryTrait for StubCampaigns {
        fn list(&self) -> Result<Vec<Campaign>> {
            Ok(self.0.clone())
        }

        fn get_by_id(&self, _campaign_id: i32) -> Result<Campaign> {
            unimplemented!()
        }

        async fn insert(&self, _new_campaign: NewCampaign) -> Result<Campaign> {
            unimplemented!()
        }
    }

    struct StubLeads(Vec<Lead>);

    #[async_trait]
    impl LeadRepositoryTrait for StubLeads {
        fn list_filtered(&self, _filters: &LeadFilters) -> Result<Vec<Lead>> {
            Ok(self.0.clone())
        }

        async fn insert(&self, _new_lead: NewLead) -> Result<Lead> {
            unimplemented!()
        }

        async fn update_stage(&self, _lead_id: i32, _stage: String) -> Result<Lead> {
            unimplemented!()
        }

        fn count_by_stage(&self) -> Result<Vec<(String, i64)>> {
            unimplemented!()
        }
    }

    struct StubUsers(Vec<User>);

    #[async_trait]
    impl UserRepositoryTrait for StubUsers {
        fn list(&self) -> Result<Vec<User>> {
            Ok(self.0.clone())
        }

        fn find_by_username(&self, _username: &str) -> Result<Option<AuthRecord>> {
            unimplemented!()
        }

        async fn insert(
            &self,
            _username: String,
            _password_hash: String,
            _role: String,
        ) -> Result<User> {
            unimplemented!()
        }
    }

    struct MockTracker {
        entries: Arc<Mutex<Vec<TrackerEntry>>>,
    }

    #[async_trait]
    impl TrackerRepositoryTrait for MockTracker {
        fn list(&self) -> Result<Vec<TrackerEntry>> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn insert_batch(&self, batch: Vec<NewTrackerEntry>) -> Result<usize> {
            let mut entries = self.entries.lock().unwrap();
            let written = batch.len();
            for entry in batch {
                let id = entries.len() as i32 + 1;
                entries.push(TrackerEntry {
                    id,
                    week: entry.week,
                    date_range: entry.date_range,
                    company_name: entry.company_name,
                    address: entry.address,
                    contact_person: entry.contact_person,
                    telephone: entry.telephone,
                    email: entry.email,
                    proposal_status: entry.proposal_status,
                    site_visit: entry.site_visit,
                    follow_up_comments: entry.follow_up_comments,
                    sector: entry.sector,
                    created_at: "2025-06-01 09:00:00".to_string(),
                });
            }
            Ok(written)
        }
    }

    fn interaction(rep: Option<i32>, campaign: Option<i32>) -> InteractionWithClient {
        InteractionWithClient {
            interaction: Interaction {
                id: 0,
                client_id: 1,
                action_type: "Call".to_string(),
                notes: Some("intro call".to_string()),
                interaction_date: "2025-06-01".to_string(),
                outcome: None,
                next_action_date: None,
                assigned_to: rep,
                campaign_id: campaign,
                created_at: "2025-06-01 09:00:00".to_string(),
            },
            client_name: "Tema Steel".to_string(),
            sector: Some("Steel & Metal Processing".to_string()),
            region: Some("Greater Accra".to_string()),
        }
    }

    fn service(
        interactions: Vec<InteractionWithClient>,
        tracker: Arc<MockTracker>,
    ) -> ReportsService {
        ReportsService::new(
            Arc::new(StubInteractions(interactions)),
            Arc::new(StubCampaigns(vec![])),
            Arc::new(StubLeads(vec![])),
            Arc::new(StubUsers(vec![User {
                id: 2,
                username: "jojo".to_string(),
                role: "Sales Rep".to_string(),
                created_at: "2025-01-01 00:00:00".to_string(),
            }])),
            tracker,
        )
    }

    fn empty_tracker() -> Arc<MockTracker> {
        Arc::new(MockTracker {
            entries: Arc::new(Mutex::new(Vec::new())),
        })
    }

    #[test]
    fn rep_activity_groups_by_assignee_and_resolves_usernames() {
        let rows = vec![
            interaction(Some(2), None),
            interaction(Some(2), None),
            interaction(None, None),
        ];
        let activity = service(rows, empty_tracker())
            .rep_activity(&InteractionFilters::default())
            .unwrap();

        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].username, "jojo");
        assert_eq!(activity[0].interactions, 2);
    }

    #[tokio::test]
    async fn tracker_import_validates_whole_batch_before_writing() {
        let tracker = empty_tracker();
        let service = service(vec![], tracker.clone());

        let batch = vec![
            NewTrackerEntry {
                week: Some("W23".to_string()),
                date_range: None,
                company_name: "Tema Steel".to_string(),
                address: None,
                contact_person: None,
                telephone: None,
                email: None,
                proposal_status: None,
                site_visit: None,
                follow_up_comments: None,
                sector: None,
            },
            NewTrackerEntry {
                week: Some("W23".to_string()),
                date_range: None,
                company_name: "   ".to_string(),
                address: None,
                contact_person: None,
                telephone: None,
                email: None,
                proposal_status: None,
                site_visit: None,
                follow_up_comments: None,
                sector: None,
            },
        ];

        assert!(service.import_tracker_entries(batch).await.is_err());
        assert!(tracker.list().unwrap().is_empty());
    }

    #[test]
    fn csv_export_includes_header_and_one_row_per_interaction() {
        let rows = vec![interaction(Some(2), None)];
        let bytes = service(rows, empty_tracker())
            .export_interactions_csv(&InteractionFilters::default())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,date,company"));
        assert!(lines[1].contains("Tema Steel"));
    }
}
