use axum::{response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
  domains::{attendee::rest::attendee_routes, event::rest::event_routes, user::rest::user_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(hello_world_handler))
    .nest("/api/v1", api_routes())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn api_routes() -> Router<SharedAppState> {
  user_routes().merge(event_routes()).merge(attendee_routes())
}

pub async fn hello_world_handler() -> Html<String> {
  Html("<h1>Event Registration API</h1>".to_string())
}
