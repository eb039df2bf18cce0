pub mod pool;

use std::error::Error;

#[derive(Debug)]
pub enum RepositoryError {
  DatabaseError(sqlx::Error),
  NotFound(String),
  Conflict(String),
}

impl Error for RepositoryError {}

impl std::fmt::Display for RepositoryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RepositoryError::DatabaseError(e) => write!(f, "Database error: {}", e),
      RepositoryError::NotFound(msg) => write!(f, "Not found: {}", msg),
      RepositoryError::Conflict(msg) => write!(f, "Conflict: {}", msg),
    }
  }
}

impl From<sqlx::Error> for RepositoryError {
  fn from(err: sqlx::Error) -> Self {
    // Constraint-level uniqueness is the authoritative duplicate check.
    let constraint = err
      .as_database_error()
      .filter(|db_err| db_err.is_unique_violation())
      .map(|db_err| db_err.constraint().unwrap_or("unique").to_string());

    match constraint {
      Some(name) => RepositoryError::Conflict(format!("Unique constraint violated: {}", name)),
      None => RepositoryError::DatabaseError(err),
    }
  }
}
