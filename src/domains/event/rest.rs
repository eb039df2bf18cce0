use axum::{
  extract::State,
  http::StatusCode,
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::model::{CreateEventRequest, Event};
use crate::{
  state::{AppState, SharedAppState},
  utils::json::ValidatedJson,
  AppError,
};

pub fn event_routes() -> Router<SharedAppState> {
  Router::new().route("/events", post(create_event_handler).get(get_events_handler))
}

pub async fn create_event_handler(
  State(state): State<SharedAppState>,
  ValidatedJson(payload): ValidatedJson<CreateEventRequest>,
) -> Result<(StatusCode, JsonResponse<Event>), AppError> {
  let event = state.create_event(payload).await?;
  Ok((StatusCode::CREATED, JsonResponse(event)))
}

pub async fn get_events_handler(State(state): State<SharedAppState>) -> Result<JsonResponse<Vec<Event>>, AppError> {
  state.list_events().await.map(JsonResponse).map_err(Into::into)
}
