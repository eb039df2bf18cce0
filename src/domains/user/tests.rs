#[cfg(test)]
mod tests {
  use crate::db::RepositoryError;
  use crate::domains::user::{
    model::{CreateUserRequest, User},
    repository::UserRepository,
    service::{UserService, UserServiceError, UserServiceImpl},
  };
  use async_trait::async_trait;
  use mockall::predicate;

  mockall::mock! {
      UserRepository {}

      #[async_trait]
      impl UserRepository for UserRepository {
          async fn create(&self, name: &str, email: &str, password: &str) -> Result<User, RepositoryError>;
          async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
          async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
      }
  }

  fn user(id: i32, name: &str, email: &str) -> User {
    User {
      id,
      name: name.to_string(),
      email: email.to_string(),
      password: crate::utils::hash_password("password123"),
    }
  }

  #[tokio::test]
  async fn test_create_user_success() {
    let mut mock_repo = MockUserRepository::new();
    mock_repo
      .expect_create()
      .with(
        predicate::eq("Test User"),
        predicate::eq("test@example.com"),
        predicate::always(),
      )
      .times(1)
      .returning(|_, _, _| Ok(user(1, "Test User", "test@example.com")));

    let service = UserServiceImpl::new(mock_repo);
    let req = CreateUserRequest {
      name: "Test User".to_string(),
      email: "test@example.com".to_string(),
      password: "password123".to_string(),
    };

    let response = service.create_user(req).await.expect("create user");
    assert_eq!(response.id, 1);
    assert_eq!(response.email, "test@example.com");
    assert_eq!(response.name, "Test User");
  }

  #[tokio::test]
  async fn test_create_user_invalid_email_skips_store() {
    let mut mock_repo = MockUserRepository::new();
    mock_repo.expect_create().times(0);

    let service = UserServiceImpl::new(mock_repo);
    let req = CreateUserRequest {
      name: "Test User".to_string(),
      email: "invalid-email".to_string(),
      password: "password123".to_string(),
    };

    let result = service.create_user(req).await;
    assert!(matches!(result, Err(UserServiceError::ValidationError(_))));
  }

  #[tokio::test]
  async fn test_create_user_duplicate_email() {
    let mut mock_repo = MockUserRepository::new();
    mock_repo
      .expect_create()
      .times(1)
      .returning(|_, _, _| Err(RepositoryError::Conflict("users_email_key".to_string())));

    let service = UserServiceImpl::new(mock_repo);
    let req = CreateUserRequest {
      name: "Test User".to_string(),
      email: "taken@example.com".to_string(),
      password: "password123".to_string(),
    };

    match service.create_user(req).await {
      Err(UserServiceError::Conflict(msg)) => assert_eq!(msg, "Email is already registered"),
      other => panic!("Expected Conflict error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_get_user_not_found() {
    let mut mock_repo = MockUserRepository::new();
    mock_repo
      .expect_find_by_id()
      .with(predicate::eq(42))
      .times(1)
      .returning(|_| Ok(None));

    let service = UserServiceImpl::new(mock_repo);

    let result = service.get_user(42).await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound(_))));
  }

  #[tokio::test]
  async fn test_get_user_store_failure_is_internal() {
    let mut mock_repo = MockUserRepository::new();
    mock_repo
      .expect_find_by_id()
      .times(1)
      .returning(|_| Err(RepositoryError::DatabaseError(sqlx::Error::PoolTimedOut)));

    let service = UserServiceImpl::new(mock_repo);

    let result = service.get_user(1).await;
    assert!(matches!(result, Err(UserServiceError::InternalServerError(_))));
  }

  #[tokio::test]
  async fn test_list_users_hides_passwords() {
    let mut mock_repo = MockUserRepository::new();
    mock_repo
      .expect_find_all()
      .times(1)
      .returning(|| Ok(vec![user(1, "A", "a@example.com"), user(2, "B", "b@example.com")]));

    let service = UserServiceImpl::new(mock_repo);

    let response = service.list_users().await.expect("list users");
    assert_eq!(response.users.len(), 2);

    let body = serde_json::to_string(&response).expect("serialize");
    assert!(!body.contains("password"));
  }
}
