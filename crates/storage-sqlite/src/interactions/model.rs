//! Database models for interactions.

use diesel::prelude::*;

use leadfolio_core::interactions::{Interaction, NewInteraction};

/// Database model for interactions.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::interactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InteractionDB {
    pub id: i32,
    pub client_id: i32,
    pub action_type: String,
    pub notes: Option<String>,
    pub interaction_date: String,
    pub outcome: Option<String>,
    pub next_action_date: Option<String>,
    pub assigned_to: Option<i32>,
    pub campaign_id: Option<i32>,
    pub created_at: String,
}

/// Database model for inserting an interaction.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::interactions)]
pub struct NewInteractionDB {
    pub client_id: i32,
    pub action_type: String,
    pub notes: Option<String>,
    pub interaction_date: String,
    pub outcome: Option<String>,
    pub next_action_date: Option<String>,
    pub assigned_to: Option<i32>,
    pub campaign_id: Option<i32>,
}

impl From<InteractionDB> for Interaction {
    fn from(db: InteractionDB) -> Self {
        Self {
            id: db.id,
            client_id: db.client_id,
            action_type: db.action_type,
            notes: db.notes,
            interaction_date: db.interaction_date,
            outcome: db.outcome,
            next_action_date: db.next_action_date,
            assigned_to: db.assigned_to,
            campaign_id: db.campaign_id,
            created_at: db.created_at,
        }
    }
}

impl From<NewInteraction> for NewInteractionDB {
    fn from(domain: NewInteraction) -> Self {
        Self {
            client_id: domain.client_id,
            action_type: domain.action_type,
            notes: domain.notes,
            interaction_date: domain.interaction_date,
            outcome: domain.outcome,
            next_action_date: domain.next_action_date,
            assigned_to: domain.assigned_to,
            campaign_id: domain.campaign_id,
        }
    }
}
