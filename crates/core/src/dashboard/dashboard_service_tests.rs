#[cfg(test)]
mod tests {
    use crate::campaigns::{Lead, LeadFilters, LeadRepositoryTrait, NewLead};
    use crate::clients::{Client, ClientRepositoryTrait, Contact, NewClient, NewContact};
    use crate::dashboard::{DashboardService, DashboardServiceTrait};
    use crate::errors::Result;
    use crate::filters::InteractionFilters;
    use crate::interactions::{
        Interaction, InteractionRepositoryTrait, InteractionWithClient, NewInteraction,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

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

    struct StubClients(Vec<Client>);

    #[async_trait]
    impl ClientRepositoryTrait for StubClients {
        fn list(&self) -> Result<Vec<Client>> {
            Ok(self.0.clone())
        }

        fn get_by_id(&self, _client_id: i32) -> Result<Client> {
            unimplemented!()
        }

        async fn insert(&self, _new_client: NewClient) -> Result<Client> {
            unimplemented!()
        }

        async fn delete(&self, _client_id: i32) -> Result<usize> {
            unimplemented!()
        }

        fn list_contacts(&self, _client_id: i32) -> Result<Vec<Contact>> {
            unimplemented!()
        }

        async fn insert_contact(&self, _new_contact: NewContact) -> Result<Contact> {
            unimplemented!()
        }
    }

    struct StubLeads(Vec<(String, i64)>);

    #[async_trait]
    impl LeadRepositoryTrait for StubLeads {
        fn list_filtered(&self, _filters: &LeadFilters) -> Result<Vec<Lead>> {
            unimplemented!()
        }

        async fn insert(&self, _new_lead: NewLead) -> Result<Lead> {
            unimplemented!()
        }

        async fn update_stage(&self, _lead_id: i32, _stage: String) -> Result<Lead> {
            unimplemented!()
        }

        fn count_by_stage(&self) -> Result<Vec<(String, i64)>> {
            Ok(self.0.clone())
        }
    }

    fn interaction(day: &str, action: &str, sector: Option<&str>) -> InteractionWithClient {
        InteractionWithClient {
            interaction: Interaction {
                id: 0,
                client_id: 1,
                action_type: action.to_string(),
                notes: None,
                interaction_date: day.to_string(),
                outcome: None,
                next_action_date: None,
                assigned_to: None,
                campaign_id: None,
                created_at: format!("{day} 09:00:00"),
            },
            client_name: "Tema Steel".to_string(),
            sector: sector.map(|s| s.to_string()),
            region: Some("Greater Accra".to_string()),
        }
    }

    fn client(name: &str, sector: Option<&str>) -> Client {
        Client {
            id: 0,
            company_name: name.to_string(),
            sector: sector.map(|s| s.to_string()),
            region: None,
            location: None,
            size: None,
            revenue: 0.0,
            potential_value: 0.0,
            notes: None,
            created_at: "2025-05-01".to_string(),
        }
    }

    fn service(
        interactions: Vec<InteractionWithClient>,
        clients: Vec<Client>,
        stages: Vec<(String, i64)>,
    ) -> DashboardService {
        DashboardService::new(
            Arc::new(StubInteractions(interactions)),
            Arc::new(StubClients(clients)),
            Arc::new(StubLeads(stages)),
        )
    }

    #[test]
    fn funnel_keeps_fixed_order_and_zero_fills_missing_stages() {
        let observed = vec![
            ("Opportunity".to_string(), 2),
            ("Lost".to_string(), 1),
            ("Lead".to_string(), 5),
        ];
        let dashboard = service(vec![], vec![], observed)
            .get_dashboard(&InteractionFilters::default())
            .unwrap();

        let stages: Vec<(&str, i64)> = dashboard
            .funnel
            .iter()
            .map(|f| (f.stage.as_str(), f.count))
            .collect();
        assert_eq!(
            stages,
            vec![("Lead", 5), ("Opportunity", 2), ("Client", 0), ("Lost", 1)]
        );
    }

    #[test]
    fn time_series_counts_interactions_per_day_in_order() {
        let rows = vec![
            interaction("2025-06-02", "Call", Some("Power Generation")),
            interaction("2025-06-01", "Email", Some("Power Generation")),
            interaction("2025-06-02", "Call", Some("Power Generation")),
        ];
        let dashboard = service(rows, vec![], vec![])
            .get_dashboard(&InteractionFilters::default())
            .unwrap();

        let series: Vec<(&str, i64)> = dashboard
            .interactions_over_time
            .iter()
            .map(|p| (p.day.as_str(), p.count))
            .collect();
        assert_eq!(series, vec![("2025-06-01", 1), ("2025-06-02", 2)]);
    }

    #[test]
    fn heatmap_drops_rows_without_a_sector() {
        let rows = vec![
            interaction("2025-06-01", "Call", Some("Power Generation")),
            interaction("2025-06-01", "Call", None),
        ];
        let dashboard = service(rows, vec![], vec![])
            .get_dashboard(&InteractionFilters::default())
            .unwrap();

        assert_eq!(dashboard.sector_action_heatmap.len(), 1);
        assert_eq!(dashboard.sector_action_heatmap[0].count, 1);
    }

    #[test]
    fn summary_counts_distinct_companies_and_sectors() {
        let clients = vec![
            client("Tema Steel", Some("Steel & Metal Processing")),
            client("Tema Steel", Some("Steel & Metal Processing")),
            client("Kumasi Foods", Some("Food & Beverage Manufacturing")),
            client("No Sector Ltd", None),
        ];
        let rows = vec![interaction("2025-06-01", "Call", None)];
        let dashboard = service(rows, clients, vec![])
            .get_dashboard(&InteractionFilters::default())
            .unwrap();

        assert_eq!(dashboard.summary.companies_reached, 3);
        assert_eq!(dashboard.summary.interactions_logged, 1);
        assert_eq!(dashboard.summary.sectors_covered, 2);
    }

    #[test]
    fn companies_by_sector_sorts_largest_first() {
        let clients = vec![
            client("A", Some("Power Generation")),
            client("B", Some("Power Generation")),
            client("C", Some("Shipyards & Marine")),
        ];
        let dashboard = service(vec![], clients, vec![])
            .get_dashboard(&InteractionFilters::default())
            .unwrap();

        assert_eq!(dashboard.companies_by_sector[0].sector, "Power Generation");
        assert_eq!(dashboard.companies_by_sector[0].count, 2);
    }
}
