//! Database models for campaigns and leads.

use diesel::prelude::*;

use leadfolio_core::campaigns::{Campaign, Lead, NewCampaign, NewLead};

/// Database model for campaigns.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignDB {
    pub id: i32,
    pub name: String,
    pub ctype: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Database model for inserting a campaign.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct NewCampaignDB {
    pub name: String,
    pub ctype: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// Database model for leads.
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(CampaignDB, foreign_key = campaign_id))]
#[diesel(table_name = crate::schema::leads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LeadDB {
    pub id: i32,
    pub client_id: Option<i32>,
    pub campaign_id: Option<i32>,
    pub lead_source: Option<String>,
    pub stage: String,
    pub assigned_to: Option<i32>,
    pub created_at: String,
}

/// Database model for inserting a lead.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::leads)]
pub struct NewLeadDB {
    pub client_id: Option<i32>,
    pub campaign_id: Option<i32>,
    pub lead_source: Option<String>,
    pub stage: String,
    pub assigned_to: Option<i32>,
}

// Conversion to and from domain models

impl From<CampaignDB> for Campaign {
    fn from(db: CampaignDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            ctype: db.ctype,
            start_date: db.start_date,
            end_date: db.end_date,
            description: db.description,
            created_at: db.created_at,
        }
    }
}

impl From<NewCampaign> for NewCampaignDB {
    fn from(domain: NewCampaign) -> Self {
        Self {
            name: domain.name,
            ctype: domain.ctype,
            start_date: domain.start_date,
            end_date: domain.end_date,
            description: domain.description,
        }
    }
}

impl From<LeadDB> for Lead {
    fn from(db: LeadDB) -> Self {
        Self {
            id: db.id,
            client_id: db.client_id,
            campaign_id: db.campaign_id,
            lead_source: db.lead_source,
            stage: db.stage,
            assigned_to: db.assigned_to,
            created_at: db.created_at,
        }
    }
}

impl From<NewLead> for NewLeadDB {
    fn from(domain: NewLead) -> Self {
        Self {
            client_id: domain.client_id,
            campaign_id: domain.campaign_id,
            lead_source: domain.lead_source,
            stage: domain.stage,
            assigned_to: domain.assigned_to,
        }
    }
}
