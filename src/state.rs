use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::{
  attendee::{
    model::{AttendeesResponse, EventAttendeesResponse, RegisterResponse, UnregisterResponse, UserEventsResponse},
    repository::{AttendeeRepository, SqlxAttendeeRepository},
    service::{AttendeeService, AttendeeServiceError, AttendeeServiceImpl},
  },
  event::{
    model::{CreateEventRequest, Event},
    repository::{EventRepository, SqlxEventRepository},
    service::{EventService, EventServiceError, EventServiceImpl},
  },
  user::{
    model::{CreateUserRequest, UserResponse, UsersResponse},
    repository::{SqlxUserRepository, UserRepository},
    service::{UserService, UserServiceError, UserServiceImpl},
  },
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn create_user(
    &self,
    req: CreateUserRequest,
  ) -> impl std::future::Future<Output = Result<UserResponse, UserServiceError>> + Send;
  fn list_users(&self) -> impl std::future::Future<Output = Result<UsersResponse, UserServiceError>> + Send;
  fn get_user(&self, user_id: i32) -> impl std::future::Future<Output = Result<UserResponse, UserServiceError>> + Send;

  fn create_event(
    &self,
    req: CreateEventRequest,
  ) -> impl std::future::Future<Output = Result<Event, EventServiceError>> + Send;
  fn list_events(&self) -> impl std::future::Future<Output = Result<Vec<Event>, EventServiceError>> + Send;

  fn register(
    &self,
    user_id: i32,
    event_id: i32,
  ) -> impl std::future::Future<Output = Result<RegisterResponse, AttendeeServiceError>> + Send;
  fn unregister(
    &self,
    attendee_id: i32,
  ) -> impl std::future::Future<Output = Result<UnregisterResponse, AttendeeServiceError>> + Send;
  fn unregister_by_pair(
    &self,
    user_id: i32,
    event_id: i32,
  ) -> impl std::future::Future<Output = Result<UnregisterResponse, AttendeeServiceError>> + Send;
  fn list_attendees_for_event(
    &self,
    event_id: i32,
  ) -> impl std::future::Future<Output = Result<EventAttendeesResponse, AttendeeServiceError>> + Send;
  fn list_events_for_user(
    &self,
    user_id: i32,
  ) -> impl std::future::Future<Output = Result<UserEventsResponse, AttendeeServiceError>> + Send;
  fn list_all_attendees(
    &self,
  ) -> impl std::future::Future<Output = Result<AttendeesResponse, AttendeeServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<dyn UserService>,
  pub event_service: Arc<dyn EventService>,
  pub attendee_service: Arc<dyn AttendeeService>,
}

impl SharedAppState {
  pub fn new(pool: PgPool) -> Self {
    Self::from_repositories(
      SqlxUserRepository::new(pool.clone()),
      SqlxEventRepository::new(pool.clone()),
      SqlxAttendeeRepository::new(pool),
    )
  }

  /// Wires every service over the given store handles.
  pub fn from_repositories<U, E, A>(users: U, events: E, attendees: A) -> Self
  where
    U: UserRepository + Clone + 'static,
    E: EventRepository + Clone + 'static,
    A: AttendeeRepository + 'static,
  {
    let user_service = Arc::new(UserServiceImpl::new(users.clone()));
    let event_service = Arc::new(EventServiceImpl::new(events.clone(), users.clone()));
    let attendee_service = Arc::new(AttendeeServiceImpl::new(users, events, attendees));

    Self {
      user_service,
      event_service,
      attendee_service,
    }
  }
}

impl AppState for SharedAppState {
  async fn create_user(&self, req: CreateUserRequest) -> Result<UserResponse, UserServiceError> {
    self.user_service.create_user(req).await
  }

  async fn list_users(&self) -> Result<UsersResponse, UserServiceError> {
    self.user_service.list_users().await
  }

  async fn get_user(&self, user_id: i32) -> Result<UserResponse, UserServiceError> {
    self.user_service.get_user(user_id).await
  }

  async fn create_event(&self, req: CreateEventRequest) -> Result<Event, EventServiceError> {
    self.event_service.create_event(req).await
  }

  async fn list_events(&self) -> Result<Vec<Event>, EventServiceError> {
    self.event_service.list_events().await
  }

  async fn register(&self, user_id: i32, event_id: i32) -> Result<RegisterResponse, AttendeeServiceError> {
    self.attendee_service.register(user_id, event_id).await
  }

  async fn unregister(&self, attendee_id: i32) -> Result<UnregisterResponse, AttendeeServiceError> {
    self.attendee_service.unregister(attendee_id).await
  }

  async fn unregister_by_pair(&self, user_id: i32, event_id: i32) -> Result<UnregisterResponse, AttendeeServiceError> {
    self.attendee_service.unregister_by_pair(user_id, event_id).await
  }

  async fn list_attendees_for_event(&self, event_id: i32) -> Result<EventAttendeesResponse, AttendeeServiceError> {
    self.attendee_service.list_attendees_for_event(event_id).await
  }

  async fn list_events_for_user(&self, user_id: i32) -> Result<UserEventsResponse, AttendeeServiceError> {
    self.attendee_service.list_events_for_user(user_id).await
  }

  async fn list_all_attendees(&self) -> Result<AttendeesResponse, AttendeeServiceError> {
    self.attendee_service.list_all_attendees().await
  }
}
