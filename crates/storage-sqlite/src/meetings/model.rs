//! Database models for meetings.

use diesel::prelude::*;

use leadfolio_core::meetings::{Meeting, NewMeeting};

/// Database model for meetings.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::meetings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MeetingDB {
    pub id: i32,
    pub client_id: i32,
    pub meeting_date: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub next_steps: Option<String>,
    pub opportunity_value: f64,
    pub status: String,
    pub created_at: String,
}

/// Database model for inserting a meeting. Status comes from the schema
/// default ("Planned").
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::meetings)]
pub struct NewMeetingDB {
    pub client_id: i32,
    pub meeting_date: String,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub next_steps: Option<String>,
    pub opportunity_value: f64,
}

impl From<MeetingDB> for Meeting {
    fn from(db: MeetingDB) -> Self {
        Self {
            id: db.id,
            client_id: db.client_id,
            meeting_date: db.meeting_date,
            purpose: db.purpose,
            notes: db.notes,
            next_steps: db.next_steps,
            opportunity_value: db.opportunity_value,
            status: db.status,
            created_at: db.created_at,
        }
    }
}

impl From<NewMeeting> for NewMeetingDB {
    fn from(domain: NewMeeting) -> Self {
        Self {
            client_id: domain.client_id,
            meeting_date: domain.meeting_date,
            purpose: domain.purpose,
            notes: domain.notes,
            next_steps: domain.next_steps,
            opportunity_value: domain.opportunity_value,
        }
    }
}
