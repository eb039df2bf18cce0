use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct Event {
  pub id: i32,
  pub name: String,
  pub description: String,
  pub date: DateTime<Utc>,
  pub location: String,
  pub owner_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateEventRequest {
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
  #[validate(length(min = 1, message = "Description is required"))]
  pub description: String,
  /// RFC 3339, e.g. `2023-12-25T15:04:05Z`.
  #[validate(length(min = 1, message = "Date is required"))]
  pub date: String,
  #[validate(length(min = 1, message = "Location is required"))]
  pub location: String,
  #[validate(range(min = 1, message = "Owner ID is required"))]
  pub owner_id: i32,
}

/// A validated event ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
  pub name: String,
  pub description: String,
  pub date: DateTime<Utc>,
  pub location: String,
  pub owner_id: i32,
}

/// Descriptive fields of an event, as embedded in attendee listings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventSummary {
  pub id: i32,
  pub name: String,
  pub description: String,
  pub date: DateTime<Utc>,
  pub location: String,
}

impl From<Event> for EventSummary {
  fn from(event: Event) -> Self {
    Self {
      id: event.id,
      name: event.name,
      description: event.description,
      date: event.date,
      location: event.location,
    }
  }
}

impl Event {
  pub async fn create(db: &PgPool, new_event: &NewEvent) -> Result<Event, sqlx::Error> {
    Self::create_with_executor(db, new_event).await
  }

  pub async fn create_with_executor<'e, E>(executor: E, new_event: &NewEvent) -> Result<Event, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let event = sqlx::query_as::<_, Event>(
      r#"
            INSERT INTO events (name, description, date, location, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, date, location, owner_id
            "#,
    )
    .bind(&new_event.name)
    .bind(&new_event.description)
    .bind(new_event.date)
    .bind(&new_event.location)
    .bind(new_event.owner_id)
    .fetch_one(executor)
    .await?;

    Ok(event)
  }

  pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<Event>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let event = sqlx::query_as::<_, Event>(
      r#"SELECT id, name, description, date, location, owner_id FROM events WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(event)
  }

  pub async fn find_all<'e, E>(executor: E) -> Result<Vec<Event>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let events = sqlx::query_as::<_, Event>(
      r#"SELECT id, name, description, date, location, owner_id FROM events ORDER BY id"#,
    )
    .fetch_all(executor)
    .await?;

    Ok(events)
  }
}
