use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::error::Error;
use validator::Validate;

use super::{
  model::{CreateEventRequest, Event, NewEvent},
  repository::EventRepository,
};
use crate::domains::user::repository::UserRepository;

pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Use RFC3339 format (e.g., 2023-12-25T15:04:05Z)";

#[derive(Debug)]
pub enum EventServiceError {
  ValidationError(String),
  InternalServerError(String),
}

impl Error for EventServiceError {}

impl std::fmt::Display for EventServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EventServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      EventServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

crate::impl_service_error_conversions!(EventServiceError, InternalServerError);

#[async_trait]
pub trait EventService: Send + Sync {
  async fn create_event(&self, req: CreateEventRequest) -> Result<Event, EventServiceError>;
  async fn list_events(&self) -> Result<Vec<Event>, EventServiceError>;
}

pub struct EventServiceImpl<E, U> {
  event_repository: E,
  user_repository: U,
}

impl<E, U> EventServiceImpl<E, U>
where
  E: EventRepository,
  U: UserRepository,
{
  pub fn new(event_repository: E, user_repository: U) -> Self {
    Self {
      event_repository,
      user_repository,
    }
  }
}

pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, EventServiceError> {
  DateTime::parse_from_rfc3339(raw)
    .map(|date| date.with_timezone(&Utc))
    .map_err(|_| EventServiceError::ValidationError(INVALID_DATE_MESSAGE.to_string()))
}

#[async_trait]
impl<E, U> EventService for EventServiceImpl<E, U>
where
  E: EventRepository,
  U: UserRepository,
{
  async fn create_event(&self, req: CreateEventRequest) -> Result<Event, EventServiceError> {
    req
      .validate()
      .map_err(|e| EventServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let date = parse_event_date(&req.date)?;

    if self.user_repository.find_by_id(req.owner_id).await?.is_none() {
      return Err(EventServiceError::ValidationError("Owner not found".to_string()));
    }

    let new_event = NewEvent {
      name: req.name,
      description: req.description,
      date,
      location: req.location,
      owner_id: req.owner_id,
    };

    let event = self.event_repository.create(&new_event).await?;

    tracing::info!(event_id = event.id, owner_id = event.owner_id, "Event created");

    Ok(event)
  }

  async fn list_events(&self) -> Result<Vec<Event>, EventServiceError> {
    Ok(self.event_repository.find_all().await?)
  }
}
