use async_trait::async_trait;
use std::error::Error;

use super::{
  model::{
    Attendee, AttendeeResponse, AttendeesResponse, EventAttendeesResponse, RegisterResponse, UnregisterResponse,
    UserEventsResponse,
  },
  repository::AttendeeRepository,
};
use crate::{
  db::RepositoryError,
  domains::{event::repository::EventRepository, user::repository::UserRepository},
  impl_service_error_conversions,
};

pub const ALREADY_ATTENDING_MESSAGE: &str = "User is already attending this event";
const NOT_ATTENDING_MESSAGE: &str = "User is not attending this event";
const ATTENDEE_NOT_FOUND_MESSAGE: &str = "Attendee record not found";

#[derive(Debug)]
pub enum AttendeeServiceError {
  /// A user or event named in a registration request does not exist.
  MissingReference(String),
  NotFound(String),
  Conflict(String),
  InternalServerError(String),
}

impl Error for AttendeeServiceError {}

impl std::fmt::Display for AttendeeServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      AttendeeServiceError::MissingReference(msg) => write!(f, "Missing Reference: {}", msg),
      AttendeeServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
      AttendeeServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      AttendeeServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl_service_error_conversions!(AttendeeServiceError, InternalServerError, NotFound, Conflict);

#[async_trait]
pub trait AttendeeService: Send + Sync {
  async fn register(&self, user_id: i32, event_id: i32) -> Result<RegisterResponse, AttendeeServiceError>;
  async fn unregister(&self, attendee_id: i32) -> Result<UnregisterResponse, AttendeeServiceError>;
  async fn unregister_by_pair(&self, user_id: i32, event_id: i32) -> Result<UnregisterResponse, AttendeeServiceError>;
  async fn list_attendees_for_event(&self, event_id: i32) -> Result<EventAttendeesResponse, AttendeeServiceError>;
  async fn list_events_for_user(&self, user_id: i32) -> Result<UserEventsResponse, AttendeeServiceError>;
  async fn list_all_attendees(&self) -> Result<AttendeesResponse, AttendeeServiceError>;
}

pub struct AttendeeServiceImpl<U, E, A> {
  user_repository: U,
  event_repository: E,
  attendee_repository: A,
}

impl<U, E, A> AttendeeServiceImpl<U, E, A>
where
  U: UserRepository,
  E: EventRepository,
  A: AttendeeRepository,
{
  pub fn new(user_repository: U, event_repository: E, attendee_repository: A) -> Self {
    Self {
      user_repository,
      event_repository,
      attendee_repository,
    }
  }

  /// Deletes a looked-up registration. A row removed concurrently reports `not_found`.
  async fn remove(
    &self,
    attendee: &Attendee,
    message: &str,
    not_found: &str,
  ) -> Result<UnregisterResponse, AttendeeServiceError> {
    self
      .attendee_repository
      .delete(attendee.id)
      .await
      .map_err(|e| match e {
        RepositoryError::NotFound(_) => AttendeeServiceError::NotFound(not_found.to_string()),
        other => AttendeeServiceError::from(other),
      })?;

    tracing::info!(
      attendee_id = attendee.id,
      user_id = attendee.user_id,
      event_id = attendee.event_id,
      "Attendee removed"
    );

    Ok(UnregisterResponse {
      message: message.to_string(),
      user_id: attendee.user_id,
      event_id: attendee.event_id,
    })
  }
}

#[async_trait]
impl<U, E, A> AttendeeService for AttendeeServiceImpl<U, E, A>
where
  U: UserRepository,
  E: EventRepository,
  A: AttendeeRepository,
{
  async fn register(&self, user_id: i32, event_id: i32) -> Result<RegisterResponse, AttendeeServiceError> {
    if self.user_repository.find_by_id(user_id).await?.is_none() {
      return Err(AttendeeServiceError::MissingReference("User not found".to_string()));
    }

    if self.event_repository.find_by_id(event_id).await?.is_none() {
      return Err(AttendeeServiceError::MissingReference("Event not found".to_string()));
    }

    if self
      .attendee_repository
      .find_by_user_and_event(user_id, event_id)
      .await?
      .is_some()
    {
      return Err(AttendeeServiceError::Conflict(ALREADY_ATTENDING_MESSAGE.to_string()));
    }

    // The pre-check above can race; the store's unique constraint settles it.
    let attendee = self
      .attendee_repository
      .create(user_id, event_id)
      .await
      .map_err(|e| match e {
        RepositoryError::Conflict(_) => AttendeeServiceError::Conflict(ALREADY_ATTENDING_MESSAGE.to_string()),
        other => AttendeeServiceError::from(other),
      })?;

    tracing::info!(attendee_id = attendee.id, user_id, event_id, "User registered for event");

    Ok(RegisterResponse {
      message: "Successfully registered for event".to_string(),
      attendee,
    })
  }

  async fn unregister(&self, attendee_id: i32) -> Result<UnregisterResponse, AttendeeServiceError> {
    let attendee = self
      .attendee_repository
      .find_by_id(attendee_id)
      .await?
      .ok_or_else(|| AttendeeServiceError::NotFound(ATTENDEE_NOT_FOUND_MESSAGE.to_string()))?;

    self
      .remove(&attendee, "Successfully unregistered from event", ATTENDEE_NOT_FOUND_MESSAGE)
      .await
  }

  async fn unregister_by_pair(&self, user_id: i32, event_id: i32) -> Result<UnregisterResponse, AttendeeServiceError> {
    let attendee = self
      .attendee_repository
      .find_by_user_and_event(user_id, event_id)
      .await?
      .ok_or_else(|| AttendeeServiceError::NotFound(NOT_ATTENDING_MESSAGE.to_string()))?;

    self
      .remove(&attendee, "Successfully removed user from event", NOT_ATTENDING_MESSAGE)
      .await
  }

  async fn list_attendees_for_event(&self, event_id: i32) -> Result<EventAttendeesResponse, AttendeeServiceError> {
    let event = self
      .event_repository
      .find_by_id(event_id)
      .await?
      .ok_or_else(|| AttendeeServiceError::NotFound("Event not found".to_string()))?;

    let attendees: Vec<AttendeeResponse> = self
      .attendee_repository
      .find_by_event_with_users(event_id)
      .await?
      .into_iter()
      .map(AttendeeResponse::from)
      .collect();

    Ok(EventAttendeesResponse {
      event: event.into(),
      attendees_count: attendees.len(),
      attendees,
    })
  }

  async fn list_events_for_user(&self, user_id: i32) -> Result<UserEventsResponse, AttendeeServiceError> {
    let user = self
      .user_repository
      .find_by_id(user_id)
      .await?
      .ok_or_else(|| AttendeeServiceError::NotFound("User not found".to_string()))?;

    let attending_events = self.attendee_repository.find_events_by_user(user_id).await?;

    Ok(UserEventsResponse {
      user: user.into(),
      events_count: attending_events.len(),
      attending_events,
    })
  }

  async fn list_all_attendees(&self) -> Result<AttendeesResponse, AttendeeServiceError> {
    let attendees = self
      .attendee_repository
      .find_all_with_users()
      .await?
      .into_iter()
      .map(AttendeeResponse::from)
      .collect();

    Ok(AttendeesResponse { attendees })
  }
}
