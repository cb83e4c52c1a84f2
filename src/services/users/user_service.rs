//! # 사용자 유스케이스 구현
//!
//! 가입, 로그인 검증, 이름 변경, 탈퇴와 조회의 비즈니스 규칙을 구현합니다.
//!
//! ## 처리 흐름 (가입)
//!
//! ```text
//! CreateUserRequest
//!   │ sanitized()          공백 제거, 이메일 소문자화
//!   │ check()              name → email → password 순서의 검증 에러
//!   │ check_email_duplicate
//!   │ bcrypt::hash         환경별 비용
//!   ▼
//! UserRepository::register
//! ```
//!
//! 로그인 실패는 원인(존재하지 않는 이메일, 비밀번호 불일치)과 관계없이
//! 같은 `email` 필드 검증 에러로 보고합니다.

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::{hash, verify};
use chrono::Utc;
use log::debug;

use crate::core::result::DomainResult;
use crate::domain::dto::users::request::create_user_request::validate_email;
use crate::domain::dto::users::{CreateUserRequest, LoginRequest, UpdateUserRequest};
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::users::{NewUser, User, UserChanges, Users};
use crate::domain::validation::{sanitize, OrderedValidation};
use crate::errors::domain::{notification, DomainError, FieldType, ValidationError};
use crate::propagate;
use crate::repositories::UserRepository;
use crate::services::UserUseCase;

const LOCATION: &str = "services.users.user_service.";

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { repository, bcrypt_cost }
    }
}

fn invalid_credentials(location: &str) -> DomainError {
    ValidationError::new(
        location,
        "email",
        FieldType::Required,
        notification::INVALID_EMAIL_OR_PASSWORD_NOTIFICATION,
    )
    .into()
}

#[async_trait]
impl UserUseCase for UserService {
    async fn get_all_users(&self, query: PaginationQuery) -> DomainResult<Users> {
        self.repository.get_all_users(&query).await
    }

    async fn get_user_by_id(&self, user_id: &str) -> DomainResult<User> {
        self.repository.get_user_by_id(user_id).await
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<User> {
        let email = sanitize(email).to_lowercase();
        if let Err(error) = validate_email(&email) {
            let message = error
                .message
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string());
            return DomainResult::on_failure(
                ValidationError::new(
                    format!("{}get_user_by_email", LOCATION),
                    "email",
                    FieldType::Required,
                    message,
                )
                .into(),
            );
        }

        self.repository.get_user_by_email(&email).await
    }

    async fn register(&self, request: CreateUserRequest) -> DomainResult<User> {
        let location = format!("{}register", LOCATION);
        let request = request.sanitized();
        propagate!(DomainResult::from_result(request.check(&location)));
        propagate!(self.repository.check_email_duplicate(&request.email).await);

        let started = std::time::Instant::now();
        let password_hash = propagate!(DomainResult::from_result(
            hash(&request.password, self.bcrypt_cost).map_err(|e| DomainError::internal(location.as_str(), e))
        ));
        debug!("Password hashing took: {:?}", started.elapsed());

        let user = NewUser::new(request.name, request.email, password_hash);
        self.repository.register(user).await
    }

    async fn login(&self, request: LoginRequest) -> DomainResult<User> {
        let location = format!("{}login", LOCATION);
        let request = request.sanitized();
        propagate!(DomainResult::from_result(request.check(&location)));

        let found = self.repository.get_user_by_email(&request.email).await;
        if let Some(DomainError::ItemNotFound(_)) = found.error() {
            return DomainResult::on_failure(invalid_credentials(&location));
        }
        let user = propagate!(found);

        let matches = propagate!(DomainResult::from_result(
            verify(&request.password, &user.password_hash).map_err(|e| DomainError::internal(location.as_str(), e))
        ));
        if !matches {
            return DomainResult::on_failure(invalid_credentials(&location));
        }

        DomainResult::on_success(user)
    }

    async fn update_current_user(&self, user_id: &str, request: UpdateUserRequest) -> DomainResult<User> {
        let request = request.sanitized();
        propagate!(DomainResult::from_result(
            request.check(&format!("{}update_current_user", LOCATION))
        ));

        let changes = UserChanges {
            name: request.name,
            updated_at: Utc::now(),
        };
        self.repository.update_current_user(user_id, changes).await
    }

    async fn delete_user_by_id(&self, user_id: &str) -> DomainResult<()> {
        self.repository.delete_user_by_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mocks::MockUserRepository;

    fn service(repository: Arc<MockUserRepository>) -> UserService {
        UserService::new(repository, 4)
    }

    fn register_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: " Alice Doe ".into(),
            email: email.into(),
            password: "secret-pass".into(),
            password_confirm: "secret-pass".into(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_normalizes_email() {
        let repository = Arc::new(MockUserRepository::default());
        let service = service(repository.clone());

        let user = service
            .register(register_request(" Alice@Example.com "))
            .await
            .into_result()
            .unwrap();

        assert_eq!(user.name, "Alice Doe");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, "user");
        assert!(user.verified);
        assert_ne!(user.password_hash, "secret-pass");
        assert!(bcrypt::verify("secret-pass", &user.password_hash).unwrap());
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_email_validation_error() {
        let repository = Arc::new(MockUserRepository::default());
        let service = service(repository.clone());
        service.register(register_request("bob@example.com")).await.into_result().unwrap();

        let result = service.register(register_request("BOB@example.com")).await;
        match result.error() {
            Some(DomainError::Validation(error)) => {
                assert_eq!(error.field, "email");
                assert_eq!(error.base.notification, notification::EMAIL_ALREADY_EXISTS_NOTIFICATION);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(result.data(), &User::default());
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn test_register_reports_validation_in_field_order() {
        let service = service(Arc::new(MockUserRepository::default()));
        let request = CreateUserRequest {
            name: "x".into(),
            email: "nope".into(),
            password: "short".into(),
            password_confirm: "other".into(),
        };

        match service.register(request).await.into_result() {
            Err(DomainError::Validations(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "email", "password"]);
                assert!(errors.iter().all(|e| e.base.location == "services.users.user_service.register"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_checks_password() {
        let service = service(Arc::new(MockUserRepository::default()));
        let registered = service
            .register(register_request("carol@example.com"))
            .await
            .into_result()
            .unwrap();

        let user = service
            .login(LoginRequest { email: "Carol@example.com".into(), password: "secret-pass".into() })
            .await
            .into_result()
            .unwrap();
        assert_eq!(user.user_id, registered.user_id);

        for (email, password) in [("carol@example.com", "wrong-pass"), ("nobody@example.com", "secret-pass")] {
            match service
                .login(LoginRequest { email: email.into(), password: password.into() })
                .await
                .into_result()
            {
                Err(DomainError::Validation(error)) => {
                    assert_eq!(error.field, "email");
                    assert_eq!(error.base.notification, "Invalid email or password.");
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_update_and_delete_current_user() {
        let repository = Arc::new(MockUserRepository::default());
        let service = service(repository.clone());
        let user = service
            .register(register_request("dave@example.com"))
            .await
            .into_result()
            .unwrap();

        let updated = service
            .update_current_user(&user.user_id, UpdateUserRequest { name: "  Dave  ".into() })
            .await
            .into_result()
            .unwrap();
        assert_eq!(updated.name, "Dave");

        assert!(service.delete_user_by_id(&user.user_id).await.error().is_none());
        assert!(matches!(
            service.get_user_by_id(&user.user_id).await.error(),
            Some(DomainError::ItemNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_email_validates_format() {
        let service = service(Arc::new(MockUserRepository::default()));

        assert!(matches!(
            service.get_user_by_email("not-an-email").await.error(),
            Some(DomainError::Validation(_))
        ));
        assert!(matches!(
            service.get_user_by_email("ghost@example.com").await.error(),
            Some(DomainError::ItemNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_login_with_corrupt_hash_is_internal() {
        let repository = Arc::new(MockUserRepository::default());
        repository.insert(User {
            user_id: "u1".into(),
            email: "carol@example.com".into(),
            password_hash: "not-a-bcrypt-hash".into(),
            ..User::default()
        });
        let service = service(repository);

        let result = service
            .login(LoginRequest {
                email: "carol@example.com".into(),
                password: "secret-pass".into(),
            })
            .await;

        assert!(result.error().is_some_and(DomainError::is_internal));
        assert_eq!(result.error().and_then(DomainError::location), Some("services.users.user_service.login"));
        assert_eq!(result.data(), &User::default());
    }
}
