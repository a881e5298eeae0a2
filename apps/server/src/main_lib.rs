use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use leadfolio_core::{
    campaigns::{
        CampaignRepositoryTrait, CampaignService, CampaignServiceTrait, LeadRepositoryTrait,
        LeadService, LeadServiceTrait,
    },
    clients::{ClientRepositoryTrait, ClientService, ClientServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    interactions::{InteractionRepositoryTrait, InteractionService, InteractionServiceTrait},
    meetings::{MeetingService, MeetingServiceTrait},
    reports::{ReportsService, ReportsServiceTrait},
    targets::{TargetService, TargetServiceTrait},
    tasks::{TaskService, TaskServiceTrait},
    users::{UserRepositoryTrait, UserService, UserServiceTrait},
};
use leadfolio_storage_sqlite::{
    campaigns::{CampaignRepository, LeadRepository},
    clients::ClientRepository,
    db::{self, write_actor, DbPool},
    interactions::InteractionRepository,
    meetings::MeetingRepository,
    targets::TargetRepository,
    tasks::TaskRepository,
    tracker::TrackerRepository,
    users::UserRepository,
    ReadCache,
};

pub struct AppState {
    pub client_service: Arc<dyn ClientServiceTrait + Send + Sync>,
    pub campaign_service: Arc<dyn CampaignServiceTrait + Send + Sync>,
    pub lead_service: Arc<dyn LeadServiceTrait + Send + Sync>,
    pub interaction_service: Arc<dyn InteractionServiceTrait + Send + Sync>,
    pub meeting_service: Arc<dyn MeetingServiceTrait + Send + Sync>,
    pub task_service: Arc<dyn TaskServiceTrait + Send + Sync>,
    pub target_service: Arc<dyn TargetServiceTrait + Send + Sync>,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub reports_service: Arc<dyn ReportsServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
    pub cache: Arc<ReadCache>,
    pub pool: Arc<DbPool>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("LF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let cache = Arc::new(ReadCache::new());
    let writer = write_actor::spawn_writer((*pool).clone(), cache.clone());

    let client_repo = Arc::new(ClientRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let campaign_repo = Arc::new(CampaignRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let lead_repo = Arc::new(LeadRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let interaction_repo = Arc::new(InteractionRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let meeting_repo = Arc::new(MeetingRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let task_repo = Arc::new(TaskRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let target_repo = Arc::new(TargetRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let user_repo = Arc::new(UserRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));
    let tracker_repo = Arc::new(TrackerRepository::new(
        pool.clone(),
        writer.clone(),
        cache.clone(),
    ));

    let client_service = Arc::new(ClientService::new(client_repo.clone()));
    let campaign_service = Arc::new(CampaignService::new(campaign_repo.clone()));
    let lead_service = Arc::new(LeadService::new(lead_repo.clone()));
    let interaction_service = Arc::new(InteractionService::new(interaction_repo.clone()));
    let meeting_service = Arc::new(MeetingService::new(meeting_repo));
    let task_service = Arc::new(TaskService::new(task_repo));
    let target_service = Arc::new(TargetService::new(target_repo));
    let user_service = Arc::new(UserService::new(user_repo.clone()));

    let dashboard_service = Arc::new(DashboardService::new(
        interaction_repo.clone() as Arc<dyn InteractionRepositoryTrait>,
        client_repo.clone() as Arc<dyn ClientRepositoryTrait>,
        lead_repo.clone() as Arc<dyn LeadRepositoryTrait>,
    ));
    let reports_service = Arc::new(ReportsService::new(
        interaction_repo as Arc<dyn InteractionRepositoryTrait>,
        campaign_repo as Arc<dyn CampaignRepositoryTrait>,
        lead_repo as Arc<dyn LeadRepositoryTrait>,
        user_repo as Arc<dyn UserRepositoryTrait>,
        tracker_repo,
    ));

    let auth = Arc::new(AuthManager::new(&config.jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        client_service,
        campaign_service,
        lead_service,
        interaction_service,
        meeting_service,
        task_service,
        target_service,
        user_service,
        dashboard_service,
        reports_service,
        auth,
        cache,
        pool,
        db_path,
    }))
}
