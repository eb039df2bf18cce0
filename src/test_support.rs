use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use chrono::{TimeZone, Utc};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  db::RepositoryError,
  domains::{
    attendee::{
      model::{Attendee, AttendeeWithUser},
      repository::AttendeeRepository,
    },
    event::{
      model::{Event, NewEvent},
      repository::EventRepository,
    },
    user::{model::User, repository::UserRepository},
  },
  state::SharedAppState,
};

/// Store fake backing all three repositories, with the same uniqueness rules as the schema.
#[derive(Clone, Default)]
pub struct InMemoryStore {
  inner: Arc<Mutex<Tables>>,
}

#[derive(Default)]
struct Tables {
  users: Vec<User>,
  events: Vec<Event>,
  attendees: Vec<Attendee>,
  last_user_id: i32,
  last_event_id: i32,
  last_attendee_id: i32,
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn tables(&self) -> MutexGuard<'_, Tables> {
    self.inner.lock().expect("store lock poisoned")
  }

  pub async fn seed_user(&self, name: &str, email: &str) -> User {
    UserRepository::create(self, name, email, "password123")
      .await
      .expect("seed user")
  }

  pub async fn seed_event(&self, owner_id: i32, name: &str) -> Event {
    let new_event = NewEvent {
      name: name.to_string(),
      description: format!("{} description", name),
      date: Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap(),
      location: "Community hall".to_string(),
      owner_id,
    };
    EventRepository::create(self, &new_event).await.expect("seed event")
  }

  pub fn attendee_count(&self, user_id: i32, event_id: i32) -> usize {
    self
      .tables()
      .attendees
      .iter()
      .filter(|a| a.user_id == user_id && a.event_id == event_id)
      .count()
  }

  fn join_user(tables: &Tables, attendee: &Attendee) -> Option<AttendeeWithUser> {
    let user = tables.users.iter().find(|u| u.id == attendee.user_id)?;
    Some(AttendeeWithUser {
      id: attendee.id,
      user_id: attendee.user_id,
      event_id: attendee.event_id,
      user_name: user.name.clone(),
      user_email: user.email.clone(),
    })
  }
}

#[async_trait]
impl UserRepository for InMemoryStore {
  async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, RepositoryError> {
    let mut tables = self.tables();
    if tables.users.iter().any(|u| u.email == email) {
      return Err(RepositoryError::Conflict("users_email_key".to_string()));
    }

    tables.last_user_id += 1;
    let user = User {
      id: tables.last_user_id,
      name: name.to_string(),
      email: email.to_string(),
      password: crate::utils::hash_password(password),
    };
    tables.users.push(user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
    Ok(self.tables().users.iter().find(|u| u.id == id).cloned())
  }

  async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
    Ok(self.tables().users.clone())
  }
}

#[async_trait]
impl EventRepository for InMemoryStore {
  async fn create(&self, new_event: &NewEvent) -> Result<Event, RepositoryError> {
    let mut tables = self.tables();
    tables.last_event_id += 1;
    let event = Event {
      id: tables.last_event_id,
      name: new_event.name.clone(),
      description: new_event.description.clone(),
      date: new_event.date,
      location: new_event.location.clone(),
      owner_id: new_event.owner_id,
    };
    tables.events.push(event.clone());
    Ok(event)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Event>, RepositoryError> {
    Ok(self.tables().events.iter().find(|e| e.id == id).cloned())
  }

  async fn find_all(&self) -> Result<Vec<Event>, RepositoryError> {
    Ok(self.tables().events.clone())
  }
}

#[async_trait]
impl AttendeeRepository for InMemoryStore {
  async fn create(&self, user_id: i32, event_id: i32) -> Result<Attendee, RepositoryError> {
    let mut tables = self.tables();
    if tables
      .attendees
      .iter()
      .any(|a| a.user_id == user_id && a.event_id == event_id)
    {
      return Err(RepositoryError::Conflict("attendees_user_event_unique".to_string()));
    }

    tables.last_attendee_id += 1;
    let attendee = Attendee {
      id: tables.last_attendee_id,
      user_id,
      event_id,
    };
    tables.attendees.push(attendee.clone());
    Ok(attendee)
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Attendee>, RepositoryError> {
    Ok(self.tables().attendees.iter().find(|a| a.id == id).cloned())
  }

  async fn find_by_user_and_event(&self, user_id: i32, event_id: i32) -> Result<Option<Attendee>, RepositoryError> {
    Ok(
      self
        .tables()
        .attendees
        .iter()
        .find(|a| a.user_id == user_id && a.event_id == event_id)
        .cloned(),
    )
  }

  async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
    let mut tables = self.tables();
    let before = tables.attendees.len();
    tables.attendees.retain(|a| a.id != id);
    if tables.attendees.len() == before {
      return Err(RepositoryError::NotFound("Attendee record not found".to_string()));
    }
    Ok(())
  }

  async fn find_by_event_with_users(&self, event_id: i32) -> Result<Vec<AttendeeWithUser>, RepositoryError> {
    let tables = self.tables();
    Ok(
      tables
        .attendees
        .iter()
        .filter(|a| a.event_id == event_id)
        .filter_map(|a| Self::join_user(&tables, a))
        .collect(),
    )
  }

  async fn find_events_by_user(&self, user_id: i32) -> Result<Vec<Event>, RepositoryError> {
    let tables = self.tables();
    Ok(
      tables
        .attendees
        .iter()
        .filter(|a| a.user_id == user_id)
        .filter_map(|a| tables.events.iter().find(|e| e.id == a.event_id).cloned())
        .collect(),
    )
  }

  async fn find_all_with_users(&self) -> Result<Vec<AttendeeWithUser>, RepositoryError> {
    let tables = self.tables();
    Ok(
      tables
        .attendees
        .iter()
        .filter_map(|a| Self::join_user(&tables, a))
        .collect(),
    )
  }
}

pub fn app_with_store(store: InMemoryStore) -> Router {
  let state = SharedAppState::from_repositories(store.clone(), store.clone(), store);
  create_app(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("DELETE")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub fn json(body: &Bytes) -> serde_json::Value {
  serde_json::from_slice(body).expect("deserialize response")
}
