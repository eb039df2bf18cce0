use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::{
  model::{CreateUserRequest, UserResponse, UsersResponse},
  repository::UserRepository,
};
use crate::db::RepositoryError;

#[derive(Debug)]
pub enum UserServiceError {
  ValidationError(String),
  UserNotFound(String),
  Conflict(String),
  InternalServerError(String),
}

impl Error for UserServiceError {}

impl std::fmt::Display for UserServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UserServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      UserServiceError::UserNotFound(msg) => write!(f, "User Not Found: {}", msg),
      UserServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      UserServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

crate::impl_service_error_conversions!(UserServiceError, InternalServerError, UserNotFound, Conflict);

#[async_trait]
pub trait UserService: Send + Sync {
  async fn create_user(&self, req: CreateUserRequest) -> Result<UserResponse, UserServiceError>;
  async fn list_users(&self) -> Result<UsersResponse, UserServiceError>;
  async fn get_user(&self, user_id: i32) -> Result<UserResponse, UserServiceError>;
}

pub struct UserServiceImpl<U> {
  user_repository: U,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U) -> Self {
    Self { user_repository }
  }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn create_user(&self, req: CreateUserRequest) -> Result<UserResponse, UserServiceError> {
    req
      .validate()
      .map_err(|e| UserServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let user = self
      .user_repository
      .create(&req.name, &req.email, &req.password)
      .await
      .map_err(|e| match e {
        RepositoryError::Conflict(_) => UserServiceError::Conflict("Email is already registered".to_string()),
        other => UserServiceError::from(other),
      })?;

    tracing::info!(user_id = user.id, "User created");

    Ok(user.into())
  }

  async fn list_users(&self) -> Result<UsersResponse, UserServiceError> {
    let users = self.user_repository.find_all().await?;

    Ok(UsersResponse {
      users: users.into_iter().map(UserResponse::from).collect(),
    })
  }

  async fn get_user(&self, user_id: i32) -> Result<UserResponse, UserServiceError> {
    let user = self
      .user_repository
      .find_by_id(user_id)
      .await?
      .ok_or_else(|| UserServiceError::UserNotFound("User not found".to_string()))?;

    Ok(user.into())
  }
}
