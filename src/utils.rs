use sha2::{Digest, Sha256};

use crate::AppError;

pub mod error;
pub mod json;

pub fn hash_password(password: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(password.as_bytes());
  let result = hasher.finalize();
  format!("{:x}", result)
}

/// Parses a numeric path segment, naming the resource in the error message.
pub fn parse_id(raw: &str, resource: &str) -> Result<i32, AppError> {
  raw
    .parse::<i32>()
    .map_err(|_| AppError::bad_request(format!("Invalid {} ID", resource)))
}
