use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{get, post},
  Router,
};

use super::model::{CreateUserRequest, UserResponse, UsersResponse};
use crate::{
  state::{AppState, SharedAppState},
  utils::{json::ValidatedJson, parse_id},
  AppError,
};

pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/users", post(create_user_handler).get(get_users_handler))
    .route("/users/{id}", get(get_user_handler))
}

pub async fn create_user_handler(
  State(state): State<SharedAppState>,
  ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, JsonResponse<UserResponse>), AppError> {
  let user = state.create_user(payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(user)))
}

pub async fn get_users_handler(State(state): State<SharedAppState>) -> Result<JsonResponse<UsersResponse>, AppError> {
  state.list_users().await.map(JsonResponse).map_err(Into::into)
}

pub async fn get_user_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<UserResponse>, AppError> {
  let user_id = parse_id(&id, "user")?;

  state.get_user(user_id).await.map(JsonResponse).map_err(Into::into)
}
