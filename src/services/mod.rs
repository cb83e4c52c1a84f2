//! 비즈니스 로직을 담당하는 유스케이스 계층 모듈
//!
//! 리포지토리 계약([`UserRepository`], [`PostRepository`]) 위에서 입력 정리와 검증,
//! 비밀번호 해싱, 소유권 확인 같은 도메인 규칙을 적용합니다.
//! 모든 연산은 리포지토리와 같이 [`DomainResult`]를 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let use_case = ServiceUseCase::new(config.security.bcrypt_cost);
//! let users = use_case.new_user_use_case(user_repository);
//! let created = users.register(request).await;
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::capabilities::UseCase;
use crate::core::result::DomainResult;
use crate::domain::dto::posts::PostRequest;
use crate::domain::dto::users::{CreateUserRequest, LoginRequest, UpdateUserRequest};
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::posts::{Post, Posts};
use crate::domain::models::users::{User, Users};
use crate::repositories::{PostRepository, UserRepository};

pub mod auth;
pub mod posts;
pub mod users;

pub use auth::TokenService;
pub use posts::post_service::PostService;
pub use users::user_service::UserService;

#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn get_all_users(&self, query: PaginationQuery) -> DomainResult<Users>;
    async fn get_user_by_id(&self, user_id: &str) -> DomainResult<User>;
    async fn get_user_by_email(&self, email: &str) -> DomainResult<User>;
    /// 입력 검증, 이메일 중복 확인, 비밀번호 해싱 후 저장합니다.
    async fn register(&self, request: CreateUserRequest) -> DomainResult<User>;
    /// 이메일/비밀번호가 맞으면 사용자를 반환합니다. 토큰 발급은 호출자 몫입니다.
    async fn login(&self, request: LoginRequest) -> DomainResult<User>;
    async fn update_current_user(&self, user_id: &str, request: UpdateUserRequest) -> DomainResult<User>;
    async fn delete_user_by_id(&self, user_id: &str) -> DomainResult<()>;
}

#[async_trait]
pub trait PostUseCase: Send + Sync {
    async fn get_all_posts(&self, query: PaginationQuery) -> DomainResult<Posts>;
    async fn get_post_by_id(&self, post_id: &str) -> DomainResult<Post>;
    async fn create_post(&self, author: &User, request: PostRequest) -> DomainResult<Post>;
    /// 작성자 본인만 수정할 수 있습니다.
    async fn update_post(&self, user_id: &str, post_id: &str, request: PostRequest) -> DomainResult<Post>;
    async fn delete_post_by_id(&self, user_id: &str, post_id: &str) -> DomainResult<()>;
}

/// "UseCase" 전략: bcrypt 비용만 설정에서 받아 유스케이스를 조립합니다.
#[derive(Debug, Clone)]
pub struct ServiceUseCase {
    bcrypt_cost: u32,
}

impl ServiceUseCase {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }
}

impl UseCase for ServiceUseCase {
    fn new_user_use_case(&self, repository: Arc<dyn UserRepository>) -> Arc<dyn UserUseCase> {
        Arc::new(UserService::new(repository, self.bcrypt_cost))
    }

    fn new_post_use_case(&self, repository: Arc<dyn PostRepository>) -> Arc<dyn PostUseCase> {
        Arc::new(PostService::new(repository))
    }
}
