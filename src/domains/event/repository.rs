use async_trait::async_trait;
use sqlx::PgPool;

use super::model::{Event, NewEvent};
use crate::db::RepositoryError;

#[async_trait]
pub trait EventRepository: Send + Sync {
  async fn create(&self, new_event: &NewEvent) -> Result<Event, RepositoryError>;
  async fn find_by_id(&self, id: i32) -> Result<Option<Event>, RepositoryError>;
  async fn find_all(&self) -> Result<Vec<Event>, RepositoryError>;
}

#[derive(Clone)]
pub struct SqlxEventRepository {
  pub pool: PgPool,
}

impl SqlxEventRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl EventRepository for SqlxEventRepository {
  async fn create(&self, new_event: &NewEvent) -> Result<Event, RepositoryError> {
    Ok(Event::create(&self.pool, new_event).await?)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Event>, RepositoryError> {
    Ok(Event::find_by_id(&self.pool, id).await?)
  }

  async fn find_all(&self) -> Result<Vec<Event>, RepositoryError> {
    Ok(Event::find_all(&self.pool).await?)
  }
}
