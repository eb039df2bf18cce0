use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};

use super::model::{Attendee, AttendeeWithUser};
use crate::{db::RepositoryError, domains::event::model::Event};

#[async_trait]
pub trait AttendeeRepository: Send + Sync {
  async fn create(&self, user_id: i32, event_id: i32) -> Result<Attendee, RepositoryError>;
  async fn find_by_id(&self, id: i32) -> Result<Option<Attendee>, RepositoryError>;
  async fn find_by_user_and_event(&self, user_id: i32, event_id: i32) -> Result<Option<Attendee>, RepositoryError>;
  async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
  async fn find_by_event_with_users(&self, event_id: i32) -> Result<Vec<AttendeeWithUser>, RepositoryError>;
  async fn find_events_by_user(&self, user_id: i32) -> Result<Vec<Event>, RepositoryError>;
  async fn find_all_with_users(&self) -> Result<Vec<AttendeeWithUser>, RepositoryError>;
}

pub async fn create<'e, E>(executor: E, user_id: i32, event_id: i32) -> Result<Attendee, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let attendee = sqlx::query_as::<_, Attendee>(
    r#"
      INSERT INTO attendees (user_id, event_id)
      VALUES ($1, $2)
      RETURNING id, user_id, event_id
    "#,
  )
  .bind(user_id)
  .bind(event_id)
  .fetch_one(executor)
  .await?;

  Ok(attendee)
}

pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<Attendee>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let attendee = sqlx::query_as::<_, Attendee>(r#"SELECT id, user_id, event_id FROM attendees WHERE id = $1"#)
    .bind(id)
    .fetch_optional(executor)
    .await?;

  Ok(attendee)
}

pub async fn find_by_user_and_event<'e, E>(
  executor: E,
  user_id: i32,
  event_id: i32,
) -> Result<Option<Attendee>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let attendee = sqlx::query_as::<_, Attendee>(
    r#"
      SELECT id, user_id, event_id
      FROM attendees
      WHERE user_id = $1 AND event_id = $2
    "#,
  )
  .bind(user_id)
  .bind(event_id)
  .fetch_optional(executor)
  .await?;

  Ok(attendee)
}

/// Returns the number of rows removed.
pub async fn delete<'e, E>(executor: E, id: i32) -> Result<u64, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let result = sqlx::query(r#"DELETE FROM attendees WHERE id = $1"#)
    .bind(id)
    .execute(executor)
    .await?;

  Ok(result.rows_affected())
}

pub async fn find_by_event_with_users<'e, E>(executor: E, event_id: i32) -> Result<Vec<AttendeeWithUser>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let rows = sqlx::query_as::<_, AttendeeWithUser>(
    r#"
      SELECT a.id, a.user_id, a.event_id, u.name AS user_name, u.email AS user_email
      FROM attendees a
      JOIN users u ON u.id = a.user_id
      WHERE a.event_id = $1
      ORDER BY a.id
    "#,
  )
  .bind(event_id)
  .fetch_all(executor)
  .await?;

  Ok(rows)
}

pub async fn find_events_by_user<'e, E>(executor: E, user_id: i32) -> Result<Vec<Event>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let events = sqlx::query_as::<_, Event>(
    r#"
      SELECT e.id, e.name, e.description, e.date, e.location, e.owner_id
      FROM attendees a
      JOIN events e ON e.id = a.event_id
      WHERE a.user_id = $1
      ORDER BY a.id
    "#,
  )
  .bind(user_id)
  .fetch_all(executor)
  .await?;

  Ok(events)
}

pub async fn find_all_with_users<'e, E>(executor: E) -> Result<Vec<AttendeeWithUser>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let rows = sqlx::query_as::<_, AttendeeWithUser>(
    r#"
      SELECT a.id, a.user_id, a.event_id, u.name AS user_name, u.email AS user_email
      FROM attendees a
      JOIN users u ON u.id = a.user_id
      ORDER BY a.id
    "#,
  )
  .fetch_all(executor)
  .await?;

  Ok(rows)
}

#[derive(Clone)]
pub struct SqlxAttendeeRepository {
  pub pool: PgPool,
}

impl SqlxAttendeeRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl AttendeeRepository for SqlxAttendeeRepository {
  async fn create(&self, user_id: i32, event_id: i32) -> Result<Attendee, RepositoryError> {
    Ok(create(&self.pool, user_id, event_id).await?)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Attendee>, RepositoryError> {
    Ok(find_by_id(&self.pool, id).await?)
  }

  async fn find_by_user_and_event(&self, user_id: i32, event_id: i32) -> Result<Option<Attendee>, RepositoryError> {
    Ok(find_by_user_and_event(&self.pool, user_id, event_id).await?)
  }

  async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
    match delete(&self.pool, id).await? {
      0 => Err(RepositoryError::NotFound("Attendee record not found".to_string())),
      _ => Ok(()),
    }
  }

  async fn find_by_event_with_users(&self, event_id: i32) -> Result<Vec<AttendeeWithUser>, RepositoryError> {
    Ok(find_by_event_with_users(&self.pool, event_id).await?)
  }

  async fn find_events_by_user(&self, user_id: i32) -> Result<Vec<Event>, RepositoryError> {
    Ok(find_events_by_user(&self.pool, user_id).await?)
  }

  async fn find_all_with_users(&self) -> Result<Vec<AttendeeWithUser>, RepositoryError> {
    Ok(find_all_with_users(&self.pool).await?)
  }
}
