use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::campaigns::{
    Campaign, CampaignRepositoryTrait, Lead, LeadFilters, LeadRepositoryTrait, NewCampaign,
    NewLead,
};
use leadfolio_core::Result;

use super::model::{CampaignDB, LeadDB, NewCampaignDB, NewLeadDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{campaigns, leads};

pub struct CampaignRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl CampaignRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        CampaignRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl CampaignRepositoryTrait for CampaignRepository {
    fn list(&self) -> Result<Vec<Campaign>> {
        let rows = self.cache.get_or_load("campaigns.list", &(), || {
            let mut conn = get_connection(&self.pool)?;
            let campaigns_db = campaigns::table
                .order((campaigns::created_at.desc(), campaigns::id.desc()))
                .load::<CampaignDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(campaigns_db
                .into_iter()
                .map(Campaign::from)
                .collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    fn get_by_id(&self, campaign_id: i32) -> Result<Campaign> {
        let row = self.cache.get_or_load("campaigns.get", &campaign_id, || {
            let mut conn = get_connection(&self.pool)?;
            let campaign_db = campaigns::table
                .find(campaign_id)
                .first::<CampaignDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(Campaign::from(campaign_db))
        })?;
        Ok(row.as_ref().clone())
    }

    async fn insert(&self, new_campaign: NewCampaign) -> Result<Campaign> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Campaign> {
                let new_campaign_db: NewCampaignDB = new_campaign.into();
                let result_db = diesel::insert_into(campaigns::table)
                    .values(&new_campaign_db)
                    .returning(CampaignDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Campaign::from(result_db))
            })
            .await
    }
}

pub struct LeadRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl LeadRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        LeadRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl LeadRepositoryTrait for LeadRepository {
    fn list_filtered(&self, filters: &LeadFilters) -> Result<Vec<Lead>> {
        let rows = self.cache.get_or_load("leads.list", filters, || {
            let mut conn = get_connection(&self.pool)?;
            let mut query = leads::table.into_boxed();
            // Empty filter members add no predicate.
            if !filters.stages.is_empty() {
                query = query.filter(leads::stage.eq_any(filters.stages.clone()));
            }
            if !filters.campaign_ids.is_empty() {
                let ids: Vec<Option<i32>> =
                    filters.campaign_ids.iter().map(|id| Some(*id)).collect();
                query = query.filter(leads::campaign_id.eq_any(ids));
            }
            if !filters.rep_ids.is_empty() {
                let ids: Vec<Option<i32>> = filters.rep_ids.iter().map(|id| Some(*id)).collect();
                query = query.filter(leads::assigned_to.eq_any(ids));
            }
            let leads_db = query
                .order((leads::created_at.desc(), leads::id.desc()))
                .load::<LeadDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(leads_db.into_iter().map(Lead::from).collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    async fn insert(&self, new_lead: NewLead) -> Result<Lead> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Lead> {
                let new_lead_db: NewLeadDB = new_lead.into();
                let result_db = diesel::insert_into(leads::table)
                    .values(&new_lead_db)
                    .returning(LeadDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Lead::from(result_db))
            })
            .await
    }

    async fn update_stage(&self, lead_id: i32, stage: String) -> Result<Lead> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Lead> {
                diesel::update(leads::table.find(lead_id))
                    .set(leads::stage.eq(stage))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = leads::table
                    .find(lead_id)
                    .first::<LeadDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Lead::from(result_db))
            })
            .await
    }

    fn count_by_stage(&self) -> Result<Vec<(String, i64)>> {
        let rows = self.cache.get_or_load("leads.count_by_stage", &(), || {
            let mut conn = get_connection(&self.pool)?;
            let counts = leads::table
                .group_by(leads::stage)
                .select((leads::stage, count_star()))
                .load::<(String, i64)>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(counts)
        })?;
        Ok(rows.as_ref().clone())
    }
}
