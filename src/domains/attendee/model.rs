use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::domains::{
  event::model::{Event, EventSummary},
  user::model::UserResponse,
};

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize, Serialize)]
pub struct Attendee {
  pub id: i32,
  pub user_id: i32,
  pub event_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateAttendeeRequest {
  #[validate(range(min = 1, message = "User ID is required"))]
  pub user_id: i32,
  #[validate(range(min = 1, message = "Event ID is required"))]
  pub event_id: i32,
}

/// Attendee row joined with its user.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AttendeeWithUser {
  pub id: i32,
  pub user_id: i32,
  pub event_id: i32,
  pub user_name: String,
  pub user_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttendeeResponse {
  pub id: i32,
  pub user_id: i32,
  pub event_id: i32,
  pub user: UserResponse,
}

impl From<AttendeeWithUser> for AttendeeResponse {
  fn from(row: AttendeeWithUser) -> Self {
    Self {
      id: row.id,
      user_id: row.user_id,
      event_id: row.event_id,
      user: UserResponse {
        id: row.user_id,
        email: row.user_email,
        name: row.user_name,
      },
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterResponse {
  pub message: String,
  pub attendee: Attendee,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnregisterResponse {
  pub message: String,
  pub user_id: i32,
  pub event_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttendeesResponse {
  pub attendees: Vec<AttendeeResponse>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventAttendeesResponse {
  pub event: EventSummary,
  pub attendees_count: usize,
  pub attendees: Vec<AttendeeResponse>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserEventsResponse {
  pub user: UserResponse,
  pub events_count: usize,
  pub attending_events: Vec<Event>,
}
