use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::reports::{NewTrackerEntry, TrackerEntry, TrackerRepositoryTrait};
use leadfolio_core::Result;

use super::model::{NewTrackerEntryDB, TrackerEntryDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::sales_campaign_tracker;

pub struct TrackerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl TrackerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        TrackerRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl TrackerRepositoryTrait for TrackerRepository {
    fn list(&self) -> Result<Vec<TrackerEntry>> {
        let rows = self.cache.get_or_load("tracker.list", &(), || {
            let mut conn = get_connection(&self.pool)?;
            let entries_db = sales_campaign_tracker::table
                .order((
                    sales_campaign_tracker::created_at.desc(),
                    sales_campaign_tracker::id.desc(),
                ))
                .load::<TrackerEntryDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(entries_db
                .into_iter()
                .map(TrackerEntry::from)
                .collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    async fn insert_batch(&self, entries: Vec<NewTrackerEntry>) -> Result<usize> {
        // One writer job covers the whole batch, so the rows land in a
        // single transaction.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let rows: Vec<NewTrackerEntryDB> =
                    entries.into_iter().map(NewTrackerEntryDB::from).collect();
                Ok(diesel::insert_into(sales_campaign_tracker::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
