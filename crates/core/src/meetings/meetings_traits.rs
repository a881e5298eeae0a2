use async_trait::async_trait;

use crate::errors::Result;
use crate::meetings::meetings_model::{Meeting, NewMeeting};

/// Trait for meeting repository operations.
#[async_trait]
pub trait MeetingRepositoryTrait: Send + Sync {
    /// Loads all meetings, newest meeting date first.
    fn list(&self) -> Result<Vec<Meeting>>;
    fn list_for_client(&self, client_id: i32) -> Result<Vec<Meeting>>;
    async fn insert(&self, new_meeting: NewMeeting) -> Result<Meeting>;
    async fn update_status(&self, meeting_id: i32, status: String) -> Result<Meeting>;
}

/// Trait for meeting service operations.
#[async_trait]
pub trait MeetingServiceTrait: Send + Sync {
    fn get_meetings(&self) -> Result<Vec<Meeting>>;
    fn get_meetings_for_client(&self, client_id: i32) -> Result<Vec<Meeting>>;
    async fn schedule_meeting(&self, new_meeting: NewMeeting) -> Result<Meeting>;
    async fn update_meeting_status(&self, meeting_id: i32, status: String) -> Result<Meeting>;
}
