//! Repository integration tests against a real SQLite file.

use std::sync::Arc;

use tempfile::TempDir;

use leadfolio_core::campaigns::{LeadFilters, LeadRepositoryTrait, NewLead};
use leadfolio_core::clients::{ClientRepositoryTrait, NewClient, NewContact};
use leadfolio_core::filters::InteractionFilters;
use leadfolio_core::interactions::{InteractionRepositoryTrait, NewInteraction};
use leadfolio_core::targets::{NewTarget, TargetRepositoryTrait};
use leadfolio_core::users::{hash_password, UserRepositoryTrait};
use leadfolio_storage_sqlite::campaigns::LeadRepository;
use leadfolio_storage_sqlite::clients::ClientRepository;
use leadfolio_storage_sqlite::db::{self, write_actor, DbPool, WriteHandle};
use leadfolio_storage_sqlite::interactions::InteractionRepository;
use leadfolio_storage_sqlite::targets::TargetRepository;
use leadfolio_storage_sqlite::users::UserRepository;
use leadfolio_storage_sqlite::ReadCache;

struct TestDb {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
    // Held so the database file outlives the test body.
    _dir: TempDir,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = db::init(dir.path().join("test.db").to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let cache = Arc::new(ReadCache::new());
    let writer = write_actor::spawn_writer((*pool).clone(), cache.clone());
    TestDb {
        pool,
        writer,
        cache,
        _dir: dir,
    }
}

fn new_client(name: &str, sector: &str, region: &str) -> NewClient {
    NewClient {
        company_name: name.to_string(),
        sector: Some(sector.to_string()),
        region: Some(region.to_string()),
        location: None,
        size: Some("Medium".to_string()),
        revenue: 0.0,
        potential_value: 0.0,
        notes: None,
    }
}

fn new_interaction(client_id: i32, action: &str, date: &str, rep: Option<i32>) -> NewInteraction {
    NewInteraction {
        client_id,
        action_type: action.to_string(),
        notes: None,
        interaction_date: date.to_string(),
        outcome: None,
        next_action_date: None,
        assigned_to: rep,
        campaign_id: None,
    }
}

#[tokio::test]
async fn client_round_trip_returns_newest_first() {
    let test_db = setup();
    let repo = ClientRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    repo.insert(new_client("First Ltd", "Power Generation", "Ashanti"))
        .await
        .unwrap();
    repo.insert(new_client("Second Ltd", "Power Generation", "Ashanti"))
        .await
        .unwrap();

    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].company_name, "Second Ltd");
    assert_eq!(listed[1].company_name, "First Ltd");
}

#[tokio::test]
async fn deleting_a_client_cascades_to_its_contacts() {
    let test_db = setup();
    let repo = ClientRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    let client = repo
        .insert(new_client("Tema Steel", "Steel & Metal Processing", "Greater Accra"))
        .await
        .unwrap();
    repo.insert_contact(NewContact {
        client_id: client.id,
        name: "Kofi Mensah".to_string(),
        designation: Some("Plant Manager".to_string()),
        phone: None,
        email: None,
        linkedin: None,
    })
    .await
    .unwrap();
    assert_eq!(repo.list_contacts(client.id).unwrap().len(), 1);

    let deleted = repo.delete(client.id).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(repo.list_contacts(client.id).unwrap().is_empty());
}

#[tokio::test]
async fn cached_reads_are_idempotent_until_a_write_lands() {
    let test_db = setup();
    let repo = ClientRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    repo.insert(new_client("Kumasi Foods", "Food & Beverage Manufacturing", "Ashanti"))
        .await
        .unwrap();

    // Identical reads before any write return identical rows.
    let first = repo.list().unwrap();
    let second = repo.list().unwrap();
    assert_eq!(first, second);

    // A write invalidates the whole cache; the next read sees the new row.
    repo.insert(new_client("Accra Mills", "Pulp & Paper / Printing", "Greater Accra"))
        .await
        .unwrap();
    let third = repo.list().unwrap();
    assert_eq!(third.len(), 2);
    assert_eq!(third[0].company_name, "Accra Mills");
}

#[tokio::test]
async fn lead_filters_omit_empty_members_and_stage_counts_group() {
    let test_db = setup();
    let repo = LeadRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    for stage in ["Lead", "Lead", "Opportunity", "Lost"] {
        repo.insert(NewLead {
            client_id: None,
            campaign_id: None,
            lead_source: Some("Trade Show".to_string()),
            stage: stage.to_string(),
            assigned_to: None,
        })
        .await
        .unwrap();
    }

    // Empty filters constrain nothing.
    let all = repo.list_filtered(&LeadFilters::default()).unwrap();
    assert_eq!(all.len(), 4);

    let lost = repo
        .list_filtered(&LeadFilters {
            stages: vec!["Lost".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(lost.len(), 1);

    let mut counts = repo.count_by_stage().unwrap();
    counts.sort();
    assert_eq!(
        counts,
        vec![
            ("Lead".to_string(), 2),
            ("Lost".to_string(), 1),
            ("Opportunity".to_string(), 1)
        ]
    );
    // "Client" has no leads and is absent here; the dashboard zero-fills it.
    assert!(!counts.iter().any(|(stage, _)| stage == "Client"));
}

#[tokio::test]
async fn interaction_filters_build_a_conjunctive_predicate() {
    let test_db = setup();
    let clients = ClientRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );
    let interactions = InteractionRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    let steel = clients
        .insert(new_client("Tema Steel", "Steel & Metal Processing", "Greater Accra"))
        .await
        .unwrap();
    let foods = clients
        .insert(new_client("Kumasi Foods", "Food & Beverage Manufacturing", "Ashanti"))
        .await
        .unwrap();

    interactions
        .insert(new_interaction(steel.id, "Call", "2025-06-01", Some(1)))
        .await
        .unwrap();
    interactions
        .insert(new_interaction(steel.id, "Proposal", "2025-06-10", Some(1)))
        .await
        .unwrap();
    interactions
        .insert(new_interaction(foods.id, "Email", "2025-05-20", None))
        .await
        .unwrap();

    // No filters: everything comes back, newest date first.
    let all = interactions
        .list_filtered(&InteractionFilters::default())
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].interaction.interaction_date, "2025-06-10");

    // Sector filter only.
    let steel_only = interactions
        .list_filtered(&InteractionFilters {
            sectors: vec!["Steel & Metal Processing".to_string()],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(steel_only.len(), 2);
    assert!(steel_only.iter().all(|i| i.client_name == "Tema Steel"));

    // Date window is inclusive at both ends.
    let june = interactions
        .list_filtered(&InteractionFilters {
            start: Some(chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            end: Some(chrono::NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(june.len(), 2);

    // Rep filter drops unassigned rows.
    let rep_one = interactions
        .list_filtered(&InteractionFilters {
            rep_ids: vec![1],
            ..Default::default()
        })
        .unwrap();
    assert_eq!(rep_one.len(), 2);
}

#[tokio::test]
async fn target_upsert_keeps_one_row_per_period() {
    let test_db = setup();
    let repo = TargetRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    repo.upsert(NewTarget {
        user_id: 1,
        month: 6,
        year: 2025,
        new_clients_target: 2,
        proposals_target: 4,
        revenue_target: 10_000.0,
    })
    .await
    .unwrap();
    let replaced = repo
        .upsert(NewTarget {
            user_id: 1,
            month: 6,
            year: 2025,
            new_clients_target: 3,
            proposals_target: 5,
            revenue_target: 12_000.0,
        })
        .await
        .unwrap();

    assert_eq!(replaced.new_clients_target, 3);
    let listed = repo.list_for_user(1).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].revenue_target, 12_000.0);
}

#[tokio::test]
async fn migrations_seed_the_bootstrap_admin() {
    let test_db = setup();
    let repo = UserRepository::new(
        test_db.pool.clone(),
        test_db.writer.clone(),
        test_db.cache.clone(),
    );

    let record = repo.find_by_username("admin").unwrap().unwrap();
    assert_eq!(record.role, "Admin");
    assert_eq!(record.password_hash, hash_password("password123"));
    assert!(repo.find_by_username("ghost").unwrap().is_none());
}
