use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{delete, get, post},
  Router,
};

use super::model::{
  AttendeesResponse, CreateAttendeeRequest, EventAttendeesResponse, RegisterResponse, UnregisterResponse,
  UserEventsResponse,
};
use crate::{
  state::{AppState, SharedAppState},
  utils::{json::ValidatedJson, parse_id},
  AppError,
};

pub fn attendee_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/attendees", post(register_handler).get(get_attendees_handler))
    .route("/attendees/{id}", delete(unregister_handler))
    .route("/events/{event_id}/attendees", get(get_event_attendees_handler))
    .route("/user/{user_id}/attending-events", get(get_user_events_handler))
    .route("/user/{user_id}/events/{event_id}", delete(unregister_by_pair_handler))
}

pub async fn register_handler(
  State(state): State<SharedAppState>,
  ValidatedJson(payload): ValidatedJson<CreateAttendeeRequest>,
) -> Result<(StatusCode, JsonResponse<RegisterResponse>), AppError> {
  let response = state.register(payload.user_id, payload.event_id).await?;
  Ok((StatusCode::CREATED, JsonResponse(response)))
}

pub async fn get_attendees_handler(
  State(state): State<SharedAppState>,
) -> Result<JsonResponse<AttendeesResponse>, AppError> {
  state.list_all_attendees().await.map(JsonResponse).map_err(Into::into)
}

pub async fn unregister_handler(
  State(state): State<SharedAppState>,
  Path(id): Path<String>,
) -> Result<JsonResponse<UnregisterResponse>, AppError> {
  let attendee_id = parse_id(&id, "attendee")?;

  state.unregister(attendee_id).await.map(JsonResponse).map_err(Into::into)
}

pub async fn get_event_attendees_handler(
  State(state): State<SharedAppState>,
  Path(event_id): Path<String>,
) -> Result<JsonResponse<EventAttendeesResponse>, AppError> {
  let event_id = parse_id(&event_id, "event")?;

  state
    .list_attendees_for_event(event_id)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn get_user_events_handler(
  State(state): State<SharedAppState>,
  Path(user_id): Path<String>,
) -> Result<JsonResponse<UserEventsResponse>, AppError> {
  let user_id = parse_id(&user_id, "user")?;

  state
    .list_events_for_user(user_id)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn unregister_by_pair_handler(
  State(state): State<SharedAppState>,
  Path((user_id, event_id)): Path<(String, String)>,
) -> Result<JsonResponse<UnregisterResponse>, AppError> {
  let user_id = parse_id(&user_id, "user")?;
  let event_id = parse_id(&event_id, "event")?;

  state
    .unregister_by_pair(user_id, event_id)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}
