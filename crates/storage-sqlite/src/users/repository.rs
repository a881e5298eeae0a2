use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::users::{AuthRecord, User, UserRepositoryTrait};
use leadfolio_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        UserRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn list(&self) -> Result<Vec<User>> {
        let rows = self.cache.get_or_load("users.list", &(), || {
            let mut conn = get_connection(&self.pool)?;
            let users_db = users::table
                .order(users::username.asc())
                .load::<UserDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(users_db.into_iter().map(User::from).collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    fn find_by_username(&self, username: &str) -> Result<Option<AuthRecord>> {
        let row = self
            .cache
            .get_or_load("users.find_by_username", &username, || {
                let mut conn = get_connection(&self.pool)?;
                let user_db = users::table
                    .filter(users::username.eq(username))
                    .first::<UserDB>(&mut conn)
                    .optional()
                    .map_err(StorageError::from)?;
                Ok(user_db.map(AuthRecord::from))
            })?;
        Ok(row.as_ref().clone())
    }

    async fn insert(&self, username: String, password_hash: String, role: String) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db = NewUserDB {
                    username,
                    password_hash,
                    role,
                };
                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }
}
