use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn conflict(message: impl Into<String>) -> Self {
    Self::new(StatusCode::CONFLICT, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    if self.status_code.is_server_error() {
      tracing::error!(status = self.status_code.as_u16(), "{}", self.message);
    }

    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<validator::ValidationErrors> for AppError {
  fn from(errors: validator::ValidationErrors) -> Self {
    AppError::bad_request(format!("Validation failed: {}", errors))
  }
}

impl From<crate::domains::user::service::UserServiceError> for AppError {
  fn from(error: crate::domains::user::service::UserServiceError) -> Self {
    use crate::domains::user::service::UserServiceError;
    match error {
      UserServiceError::ValidationError(msg) => AppError::bad_request(msg),
      UserServiceError::UserNotFound(msg) => AppError::not_found(msg),
      UserServiceError::Conflict(msg) => AppError::conflict(msg),
      UserServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}

impl From<crate::domains::event::service::EventServiceError> for AppError {
  fn from(error: crate::domains::event::service::EventServiceError) -> Self {
    use crate::domains::event::service::EventServiceError;
    match error {
      EventServiceError::ValidationError(msg) => AppError::bad_request(msg),
      EventServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}

impl From<crate::domains::attendee::service::AttendeeServiceError> for AppError {
  fn from(error: crate::domains::attendee::service::AttendeeServiceError) -> Self {
    use crate::{db::RepositoryError, domains::attendee::service::AttendeeServiceError};
    match error {
      AttendeeServiceError::MissingReference(msg) => AppError::bad_request(msg),
      AttendeeServiceError::NotFound(msg) => AppError::not_found(msg),
      AttendeeServiceError::Conflict(msg) => AppError::conflict(msg),
      AttendeeServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}
