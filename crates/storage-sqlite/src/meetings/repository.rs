use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::meetings::{Meeting, MeetingRepositoryTrait, NewMeeting};
use leadfolio_core::Result;

use super::model::{MeetingDB, NewMeetingDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::meetings;

pub struct MeetingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl MeetingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        MeetingRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl MeetingRepositoryTrait for MeetingRepository {
    fn list(&self) -> Result<Vec<Meeting>> {
        let rows = self.cache.get_or_load("meetings.list", &(), || {
            let mut conn = get_connection(&self.pool)?;
            let meetings_db = meetings::table
                .order((meetings::meeting_date.desc(), meetings::id.desc()))
                .load::<MeetingDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(meetings_db
                .into_iter()
                .map(Meeting::from)
                .collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    fn list_for_client(&self, client_id: i32) -> Result<Vec<Meeting>> {
        let rows = self
            .cache
            .get_or_load("meetings.list_for_client", &client_id, || {
                let mut conn = get_connection(&self.pool)?;
                let meetings_db = meetings::table
                    .filter(meetings::client_id.eq(client_id))
                    .order((meetings::meeting_date.desc(), meetings::id.desc()))
                    .load::<MeetingDB>(&mut conn)
                    .map_err(StorageError::from)?;
                Ok(meetings_db
                    .into_iter()
                    .map(Meeting::from)
                    .collect::<Vec<_>>())
            })?;
        Ok(rows.as_ref().clone())
    }

    async fn insert(&self, new_meeting: NewMeeting) -> Result<Meeting> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Meeting> {
                let new_meeting_db: NewMeetingDB = new_meeting.into();
                let result_db = diesel::insert_into(meetings::table)
                    .values(&new_meeting_db)
                    .returning(MeetingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Meeting::from(result_db))
            })
            .await
    }

    async fn update_status(&self, meeting_id: i32, status: String) -> Result<Meeting> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Meeting> {
                diesel::update(meetings::table.find(meeting_id))
                    .set(meetings::status.eq(status))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = meetings::table
                    .find(meeting_id)
                    .first::<MeetingDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Meeting::from(result_db))
            })
            .await
    }
}
