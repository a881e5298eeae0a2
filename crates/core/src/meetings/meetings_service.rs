use std::sync::Arc;

use super::meetings_model::{validate_status, Meeting, NewMeeting};
use super::meetings_traits::{MeetingRepositoryTrait, MeetingServiceTrait};
use crate::errors::Result;

/// Service for managing meetings and the opportunities they carry.
pub struct MeetingService {
    repository: Arc<dyn MeetingRepositoryTrait>,
}

impl MeetingService {
    pub fn new(repository: Arc<dyn MeetingRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MeetingServiceTrait for MeetingService {
    fn get_meetings(&self) -> Result<Vec<Meeting>> {
        self.repository.list()
    }

    fn get_meetings_for_client(&self, client_id: i32) -> Result<Vec<Meeting>> {
        self.repository.list_for_client(client_id)
    }

    async fn schedule_meeting(&self, new_meeting: NewMeeting) -> Result<Meeting> {
        new_meeting.validate()?;
        self.repository.insert(new_meeting).await
    }

    async fn update_meeting_status(&self, meeting_id: i32, status: String) -> Result<Meeting> {
        validate_status(&status)?;
        self.repository.update_status(meeting_id, status).await
    }
}
