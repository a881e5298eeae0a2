//! Database models for users.

use diesel::prelude::*;

use leadfolio_core::users::{AuthRecord, User};

/// Database model for users. The only shape that carries the stored hash.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
}

/// Database model for inserting a user.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserDB {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            role: db.role,
            created_at: db.created_at,
        }
    }
}

impl From<UserDB> for AuthRecord {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            password_hash: db.password_hash,
            role: db.role,
        }
    }
}
