use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use validator::Validate;

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct User {
  pub id: i32,
  pub name: String,
  pub email: String,
  #[serde(skip_serializing)]
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateUserRequest {
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
  #[validate(email(message = "Email must be a valid email address"))]
  pub email: String,
  #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
  pub password: String,
}

/// Public view of a user; the password never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserResponse {
  pub id: i32,
  pub email: String,
  pub name: String,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      email: user.email,
      name: user.name,
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsersResponse {
  pub users: Vec<UserResponse>,
}

impl User {
  pub async fn create(db: &PgPool, name: &str, email: &str, password: &str) -> Result<User, sqlx::Error> {
    Self::create_with_executor(db, name, email, password).await
  }

  pub async fn create_with_executor<'e, E>(executor: E, name: &str, email: &str, password: &str) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let hashed_password = crate::utils::hash_password(password);

    let user = sqlx::query_as::<_, User>(
      r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
    )
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(executor)
    .await?;

    Ok(user)
  }

  pub async fn find_by_id<'e, E>(executor: E, id: i32) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let user = sqlx::query_as::<_, User>(r#"SELECT id, name, email, password FROM users WHERE id = $1"#)
      .bind(id)
      .fetch_optional(executor)
      .await?;

    Ok(user)
  }

  pub async fn find_all<'e, E>(executor: E) -> Result<Vec<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let users = sqlx::query_as::<_, User>(r#"SELECT id, name, email, password FROM users ORDER BY id"#)
      .fetch_all(executor)
      .await?;

    Ok(users)
  }
}
