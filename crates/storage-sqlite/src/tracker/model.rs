//! Database models for the sales campaign tracker.

use diesel::prelude::*;

use leadfolio_core::reports::{NewTrackerEntry, TrackerEntry};

/// Database model for tracker rows.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::sales_campaign_tracker)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackerEntryDB {
    pub id: i32,
    pub week: Option<String>,
    pub date_range: Option<String>,
    pub company_name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub proposal_status: Option<String>,
    pub site_visit: Option<String>,
    pub follow_up_comments: Option<String>,
    pub sector: Option<String>,
    pub created_at: String,
}

/// Database model for inserting a tracker row.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::sales_campaign_tracker)]
pub struct NewTrackerEntryDB {
    pub week: Option<String>,
    pub date_range: Option<String>,
    pub company_name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub proposal_status: Option<String>,
    pub site_visit: Option<String>,
    pub follow_up_comments: Option<String>,
    pub sector: Option<String>,
}

impl From<TrackerEntryDB> for TrackerEntry {
    fn from(db: TrackerEntryDB) -> Self {
        Self {
            id: db.id,
            week: db.week,
            date_range: db.date_range,
            company_name: db.company_name,
            address: db.address,
            contact_person: db.contact_person,
            telephone: db.telephone,
            email: db.email,
            proposal_status: db.proposal_status,
            site_visit: db.site_visit,
            follow_up_comments: db.follow_up_comments,
            sector: db.sector,
            created_at: db.created_at,
        }
    }
}

impl From<NewTrackerEntry> for NewTrackerEntryDB {
    fn from(domain: NewTrackerEntry) -> Self {
        Self {
            week: domain.week,
            date_range: domain.date_range,
            company_name: domain.company_name,
            address: domain.address,
            contact_person: domain.contact_person,
            telephone: domain.telephone,
            email: domain.email,
            proposal_status: domain.proposal_status,
            site_visit: domain.site_visit,
            follow_up_comments: domain.follow_up_comments,
            sector: domain.sector,
        }
    }
}
