use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::clients::{Client, ClientRepositoryTrait, Contact, NewClient, NewContact};
use leadfolio_core::Result;

use super::model::{ClientDB, ContactDB, NewClientDB, NewContactDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{clients, contacts};

pub struct ClientRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl ClientRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        ClientRepository {
            pool,
            writer,
            cache,
        }
    }

    fn list_impl(&self) -> Result<Vec<Client>> {
        let rows = self.cache.get_or_load("clients.list", &(), || {
            let mut conn = get_connection(&self.pool)?;
            // created_at is a calendar date, so same-day inserts tie; the id
            // breaks the tie to keep newest-first exact.
            let clients_db = clients::table
                .order((clients::created_at.desc(), clients::id.desc()))
                .load::<ClientDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(clients_db.into_iter().map(Client::from).collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    fn list_contacts_impl(&self, client_id_filter: i32) -> Result<Vec<Contact>> {
        let rows = self
            .cache
            .get_or_load("clients.contacts", &client_id_filter, || {
                let mut conn = get_connection(&self.pool)?;
                let contacts_db = contacts::table
                    .filter(contacts::client_id.eq(client_id_filter))
                    .order(contacts::name.asc())
                    .load::<ContactDB>(&mut conn)
                    .map_err(StorageError::from)?;
                Ok(contacts_db
                    .into_iter()
                    .map(Contact::from)
                    .collect::<Vec<_>>())
            })?;
        Ok(rows.as_ref().clone())
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    fn list(&self) -> Result<Vec<Client>> {
        self.list_impl()
    }

    fn get_by_id(&self, client_id: i32) -> Result<Client> {
        let row = self.cache.get_or_load("clients.get", &client_id, || {
            let mut conn = get_connection(&self.pool)?;
            let client_db = clients::table
                .find(client_id)
                .first::<ClientDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(Client::from(client_db))
        })?;
        Ok(row.as_ref().clone())
    }

    async fn insert(&self, new_client: NewClient) -> Result<Client> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Client> {
                let new_client_db: NewClientDB = new_client.into();
                let result_db = diesel::insert_into(clients::table)
                    .values(&new_client_db)
                    .returning(ClientDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Client::from(result_db))
            })
            .await
    }

    async fn delete(&self, client_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(clients::table.find(client_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_contacts(&self, client_id: i32) -> Result<Vec<Contact>> {
        self.list_contacts_impl(client_id)
    }

    async fn insert_contact(&self, new_contact: NewContact) -> Result<Contact> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Contact> {
                let new_contact_db: NewContactDB = new_contact.into();
                let result_db = diesel::insert_into(contacts::table)
                    .values(&new_contact_db)
                    .returning(ContactDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Contact::from(result_db))
            })
            .await
    }
}
