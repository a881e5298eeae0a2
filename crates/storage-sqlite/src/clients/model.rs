//! Database models for clients and contacts.

use diesel::prelude::*;

use leadfolio_core::clients::{Client, Contact, NewClient, NewContact};

/// Database model for clients.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClientDB {
    pub id: i32,
    pub company_name: String,
    pub sector: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub revenue: f64,
    pub potential_value: f64,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Database model for inserting a client. `id` and `created_at` come from
/// the schema defaults.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
pub struct NewClientDB {
    pub company_name: String,
    pub sector: Option<String>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub revenue: f64,
    pub potential_value: f64,
    pub notes: Option<String>,
}

/// Database model for contacts.
#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(ClientDB, foreign_key = client_id))]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactDB {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: String,
}

/// Database model for inserting a contact.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::contacts)]
pub struct NewContactDB {
    pub client_id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

// Conversion to and from domain models

impl From<ClientDB> for Client {
    fn from(db: ClientDB) -> Self {
        Self {
            id: db.id,
            company_name: db.company_name,
            sector: db.sector,
            region: db.region,
            location: db.location,
            size: db.size,
            revenue: db.revenue,
            potential_value: db.potential_value,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl From<NewClient> for NewClientDB {
    fn from(domain: NewClient) -> Self {
        Self {
            company_name: domain.company_name,
            sector: domain.sector,
            region: domain.region,
            location: domain.location,
            size: domain.size,
            revenue: domain.revenue,
            potential_value: domain.potential_value,
            notes: domain.notes,
        }
    }
}

impl From<ContactDB> for Contact {
    fn from(db: ContactDB) -> Self {
        Self {
            id: db.id,
            client_id: db.client_id,
            name: db.name,
            designation: db.designation,
            phone: db.phone,
            email: db.email,
            linkedin: db.linkedin,
            created_at: db.created_at,
        }
    }
}

impl From<NewContact> for NewContactDB {
    fn from(domain: NewContact) -> Self {
        Self {
            client_id: domain.client_id,
            name: domain.name,
            designation: domain.designation,
            phone: domain.phone,
            email: domain.email,
            linkedin: domain.linkedin,
        }
    }
}
