use async_trait::async_trait;
use sqlx::PgPool;

use super::model::User;
use crate::db::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, RepositoryError>;
  async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
  async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
}

#[derive(Clone)]
pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, RepositoryError> {
    Ok(User::create(&self.pool, name, email, password).await?)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
    Ok(User::find_by_id(&self.pool, id).await?)
  }

  async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
    Ok(User::find_all(&self.pool).await?)
  }
}
