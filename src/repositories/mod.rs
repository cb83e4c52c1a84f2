//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 도메인별 리포지토리 트레이트와 MongoDB 구현을 제공합니다.
//! 모든 연산은 예외 대신 [`DomainResult`]를 반환하며, 드라이버 에러는 발생 지점에서
//! `InternalError`로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let handle = repository.new_repository().await?;
//! let users = repository.new_user_repository(&handle)?;
//! let user = users.get_user_by_email("user@example.com").await;
//! ```

pub mod mongo_repository;
pub mod posts;
pub mod users;

use async_trait::async_trait;

use crate::core::result::DomainResult;
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::posts::{NewPost, Post, PostChanges, Posts};
use crate::domain::models::users::{NewUser, User, UserChanges, Users};

pub use mongo_repository::MongoRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all_users(&self, query: &PaginationQuery) -> DomainResult<Users>;

    async fn get_user_by_id(&self, user_id: &str) -> DomainResult<User>;

    async fn get_user_by_email(&self, email: &str) -> DomainResult<User>;

    /// 이메일이 이미 사용 중이면 `email` 필드의 `ValidationError`를 반환합니다.
    async fn check_email_duplicate(&self, email: &str) -> DomainResult<()>;

    async fn register(&self, user: NewUser) -> DomainResult<User>;

    async fn update_current_user(&self, user_id: &str, changes: UserChanges) -> DomainResult<User>;

    async fn delete_user_by_id(&self, user_id: &str) -> DomainResult<()>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn get_all_posts(&self, query: &PaginationQuery) -> DomainResult<Posts>;

    async fn get_post_by_id(&self, post_id: &str) -> DomainResult<Post>;

    async fn create_post(&self, post: NewPost) -> DomainResult<Post>;

    async fn update_post(&self, post_id: &str, changes: PostChanges) -> DomainResult<Post>;

    async fn delete_post_by_id(&self, post_id: &str) -> DomainResult<()>;
}
