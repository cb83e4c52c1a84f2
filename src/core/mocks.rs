//! 테스트용 구성 요소
//!
//! 모든 목(mock)은 공유 이벤트 로그(`EventLog`)에 호출 순서를 남겨
//! 종료 순서 같은 상호 작용을 검증할 수 있게 합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::config::application_config::ApplicationConfig;
use crate::config::env_config::EnvConfig;
use crate::core::capabilities::{Config, Delivery, Logger, Repository, RepositoryHandle, UseCase};
use crate::core::container::Container;
use crate::core::factory::ComponentFactory;
use crate::core::result::DomainResult;
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::posts::{NewPost, Post, PostChanges, Posts};
use crate::domain::models::users::{NewUser, User, UserChanges, Users};
use crate::errors::domain::{
    notification, DomainError, FieldType, InternalError, ItemNotFoundError, ValidationError,
};
use crate::repositories::{PostRepository, UserRepository};
use crate::services::ServiceUseCase;

pub type EventLog = Arc<Mutex<Vec<String>>>;

fn push(events: &EventLog, event: impl Into<String>) {
    events.lock().unwrap_or_else(PoisonError::into_inner).push(event.into());
}

pub fn snapshot(events: &EventLog) -> Vec<String> {
    events.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

/// `ENVIRONMENT=test`에 주어진 값을 덮어쓴 설정
pub fn test_config(overrides: &[(&str, &str)]) -> ApplicationConfig {
    let mut values: HashMap<String, String> = HashMap::new();
    values.insert("ENVIRONMENT".into(), "test".into());
    for (key, value) in overrides {
        values.insert(key.to_string(), value.to_string());
    }
    ApplicationConfig::from_map(&values).expect("test config")
}

fn not_found(location: &str, query: String) -> DomainError {
    ItemNotFoundError::new(location, query, notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION).into()
}

#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(&'static str, DomainError)>>,
    events: EventLog,
}

impl RecordingLogger {
    pub fn with_events(events: EventLog) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            events,
        }
    }

    pub fn records(&self) -> Vec<(&'static str, DomainError)> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn count(&self, level: &str) -> usize {
        self.records().iter().filter(|(recorded, _)| *recorded == level).count()
    }

    fn record(&self, level: &'static str, error: &DomainError) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, error.clone()));
        push(&self.events, format!("logger.{}", level));
    }
}

impl Logger for RecordingLogger {
    fn trace(&self, error: &DomainError) {
        self.record("trace", error);
    }
    fn debug(&self, error: &DomainError) {
        self.record("debug", error);
    }
    fn info(&self, error: &DomainError) {
        self.record("info", error);
    }
    fn warn(&self, error: &DomainError) {
        self.record("warn", error);
    }
    fn error(&self, error: &DomainError) {
        self.record("error", error);
    }
    fn fatal(&self, error: &DomainError) {
        self.record("fatal", error);
    }
    fn panic(&self, error: &DomainError) {
        self.record("panic", error);
    }
    fn flush(&self) {
        push(&self.events, "logger.flush");
    }
}

/// 메모리 기반 사용자 리포지토리
#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap_or_else(PoisonError::into_inner).push(user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_all_users(&self, query: &PaginationQuery) -> DomainResult<Users> {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner).clone();
        match query.paginate(users.len() as u64) {
            Ok(pagination) => DomainResult::on_success(Users {
                users: users
                    .into_iter()
                    .skip(query.skip as usize)
                    .take(query.limit as usize)
                    .collect(),
                pagination,
            }),
            Err(error) => DomainResult::on_failure(error),
        }
    }

    async fn get_user_by_id(&self, user_id: &str) -> DomainResult<User> {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        match users.iter().find(|user| user.user_id == user_id) {
            Some(user) => DomainResult::on_success(user.clone()),
            None => DomainResult::on_failure(not_found("mocks.get_user_by_id", format!("_id: {}", user_id))),
        }
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<User> {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        match users.iter().find(|user| user.email == email) {
            Some(user) => DomainResult::on_success(user.clone()),
            None => DomainResult::on_failure(not_found("mocks.get_user_by_email", format!("email: {}", email))),
        }
    }

    async fn check_email_duplicate(&self, email: &str) -> DomainResult<()> {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        if users.iter().any(|user| user.email == email) {
            return DomainResult::on_failure(
                ValidationError::new(
                    "mocks.check_email_duplicate",
                    "email",
                    FieldType::Required,
                    notification::EMAIL_ALREADY_EXISTS_NOTIFICATION,
                )
                .into(),
            );
        }
        DomainResult::on_success(())
    }

    async fn register(&self, user: NewUser) -> DomainResult<User> {
        let created = User {
            user_id: ObjectId::new().to_hex(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            verified: user.verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        };
        self.insert(created.clone());
        DomainResult::on_success(created)
    }

    async fn update_current_user(&self, user_id: &str, changes: UserChanges) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        match users.iter_mut().find(|user| user.user_id == user_id) {
            Some(user) => {
                user.name = changes.name;
                user.updated_at = changes.updated_at;
                DomainResult::on_success(user.clone())
            }
            None => DomainResult::on_failure(not_found("mocks.update_current_user", format!("_id: {}", user_id))),
        }
    }

    async fn delete_user_by_id(&self, user_id: &str) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        let before = users.len();
        users.retain(|user| user.user_id != user_id);
        if users.len() == before {
            return DomainResult::on_failure(not_found("mocks.delete_user_by_id", format!("_id: {}", user_id)));
        }
        DomainResult::on_success(())
    }
}

/// 메모리 기반 게시물 리포지토리
#[derive(Default)]
pub struct MockPostRepository {
    posts: Mutex<Vec<Post>>,
}

impl MockPostRepository {
    pub fn len(&self) -> usize {
        self.posts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn get_all_posts(&self, query: &PaginationQuery) -> DomainResult<Posts> {
        let posts = self.posts.lock().unwrap_or_else(PoisonError::into_inner).clone();
        match query.paginate(posts.len() as u64) {
            Ok(pagination) => DomainResult::on_success(Posts {
                posts: posts
                    .into_iter()
                    .skip(query.skip as usize)
                    .take(query.limit as usize)
                    .collect(),
                pagination,
            }),
            Err(error) => DomainResult::on_failure(error),
        }
    }

    async fn get_post_by_id(&self, post_id: &str) -> DomainResult<Post> {
        let posts = self.posts.lock().unwrap_or_else(PoisonError::into_inner);
        match posts.iter().find(|post| post.post_id == post_id) {
            Some(post) => DomainResult::on_success(post.clone()),
            None => DomainResult::on_failure(not_found("mocks.get_post_by_id", format!("_id: {}", post_id))),
        }
    }

    async fn create_post(&self, post: NewPost) -> DomainResult<Post> {
        let created = Post {
            post_id: ObjectId::new().to_hex(),
            user_id: post.user_id,
            user: post.user,
            title: post.title,
            content: post.content,
            image: post.image,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        self.posts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(created.clone());
        DomainResult::on_success(created)
    }

    async fn update_post(&self, post_id: &str, changes: PostChanges) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap_or_else(PoisonError::into_inner);
        match posts.iter_mut().find(|post| post.post_id == post_id) {
            Some(post) => {
                post.title = changes.title;
                post.content = changes.content;
                post.image = changes.image;
                post.updated_at = changes.updated_at;
                DomainResult::on_success(post.clone())
            }
            None => DomainResult::on_failure(not_found("mocks.update_post", format!("_id: {}", post_id))),
        }
    }

    async fn delete_post_by_id(&self, post_id: &str) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap_or_else(PoisonError::into_inner);
        let before = posts.len();
        posts.retain(|post| post.post_id != post_id);
        if posts.len() == before {
            return DomainResult::on_failure(not_found("mocks.delete_post_by_id", format!("_id: {}", post_id)));
        }
        DomainResult::on_success(())
    }
}

pub struct MockRepository {
    events: EventLog,
    fail_connect: bool,
}

#[async_trait]
impl Repository for MockRepository {
    async fn new_repository(&self) -> Result<RepositoryHandle, DomainError> {
        push(&self.events, "repository.connect");
        if self.fail_connect {
            return Err(InternalError::new("mocks.new_repository", "connection refused").into());
        }
        Ok(RepositoryHandle::new(()))
    }

    async fn close_repository(&self) -> Result<(), DomainError> {
        push(&self.events, "repository.close");
        Ok(())
    }

    fn new_user_repository(&self, _handle: &RepositoryHandle) -> Result<Arc<dyn UserRepository>, DomainError> {
        Ok(Arc::new(MockUserRepository::default()))
    }

    fn new_post_repository(&self, _handle: &RepositoryHandle) -> Result<Arc<dyn PostRepository>, DomainError> {
        Ok(Arc::new(MockPostRepository::default()))
    }
}

pub struct MockDelivery {
    events: EventLog,
    fail_launch: bool,
}

#[async_trait]
impl Delivery for MockDelivery {
    async fn launch_server(&self, container: &Container) -> Result<(), DomainError> {
        container.require_user_use_case()?;
        container.require_post_use_case()?;
        push(&self.events, "delivery.launch");
        if self.fail_launch {
            return Err(InternalError::new("mocks.launch_server", "address already in use").into());
        }
        Ok(())
    }

    async fn close_server(&self) -> Result<(), DomainError> {
        push(&self.events, "delivery.close");
        Ok(())
    }
}

/// 실패 지점을 고를 수 있는 팩토리
pub struct MockFactory {
    pub events: EventLog,
    pub logger: Arc<RecordingLogger>,
    /// 이 이름이면 리포지토리 생성이 "지원하지 않는 전략"으로 실패합니다.
    pub database: Option<String>,
    pub fail_connect: bool,
    pub fail_launch: bool,
}

impl MockFactory {
    pub fn new() -> Self {
        let events: EventLog = Arc::default();
        Self {
            logger: Arc::new(RecordingLogger::with_events(events.clone())),
            events,
            database: None,
            fail_connect: false,
            fail_launch: false,
        }
    }
}

impl ComponentFactory for MockFactory {
    fn new_config(&self) -> Result<Arc<dyn Config>, DomainError> {
        Ok(Arc::new(EnvConfig::from_config(test_config(&[]))))
    }

    fn new_logger(&self, _config: &ApplicationConfig) -> Result<Arc<dyn Logger>, DomainError> {
        Ok(self.logger.clone())
    }

    fn new_repository(
        &self,
        _config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Repository>, DomainError> {
        if let Some(name) = &self.database {
            let error: DomainError = InternalError::new(
                "core.factory.new_repository",
                format!("unsupported repository type: {}", name),
            )
            .into();
            logger.fatal(&error);
            return Err(error);
        }
        Ok(Arc::new(MockRepository {
            events: self.events.clone(),
            fail_connect: self.fail_connect,
        }))
    }

    fn new_use_case(
        &self,
        _config: &ApplicationConfig,
        _logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn UseCase>, DomainError> {
        Ok(Arc::new(ServiceUseCase::new(4)))
    }

    fn new_delivery(
        &self,
        _config: &ApplicationConfig,
        _logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Delivery>, DomainError> {
        Ok(Arc::new(MockDelivery {
            events: self.events.clone(),
            fail_launch: self.fail_launch,
        }))
    }

    fn fallback_logger(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}
