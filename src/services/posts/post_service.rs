//! 게시물 유스케이스 구현
//!
//! 수정과 삭제는 게시물을 먼저 조회해 작성자와 요청자가 같은지 확인합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::result::DomainResult;
use crate::domain::dto::posts::PostRequest;
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::posts::{NewPost, Post, PostChanges, Posts};
use crate::domain::models::users::User;
use crate::domain::validation::OrderedValidation;
use crate::errors::domain::{notification, AuthorizationError};
use crate::propagate;
use crate::repositories::PostRepository;
use crate::services::PostUseCase;

const LOCATION: &str = "services.posts.post_service.";

pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// 게시물이 `user_id`의 것인지 확인합니다.
    async fn owned_post(&self, function: &str, user_id: &str, post_id: &str) -> DomainResult<Post> {
        let post = propagate!(self.repository.get_post_by_id(post_id).await);
        if !post.is_owned_by(user_id) {
            return DomainResult::on_failure(
                AuthorizationError::new(
                    format!("{}{}", LOCATION, function),
                    notification::AUTHORIZATION_ERROR_NOTIFICATION,
                )
                .into(),
            );
        }
        DomainResult::on_success(post)
    }
}

#[async_trait]
impl PostUseCase for PostService {
    async fn get_all_posts(&self, query: PaginationQuery) -> DomainResult<Posts> {
        self.repository.get_all_posts(&query).await
    }

    async fn get_post_by_id(&self, post_id: &str) -> DomainResult<Post> {
        self.repository.get_post_by_id(post_id).await
    }

    async fn create_post(&self, author: &User, request: PostRequest) -> DomainResult<Post> {
        let request = request.sanitized();
        propagate!(DomainResult::from_result(
            request.check(&format!("{}create_post", LOCATION))
        ));

        let now = Utc::now();
        let post = NewPost {
            user_id: author.user_id.clone(),
            user: author.name.clone(),
            title: request.title,
            content: request.content,
            image: request.image,
            created_at: now,
            updated_at: now,
        };
        self.repository.create_post(post).await
    }

    async fn update_post(&self, user_id: &str, post_id: &str, request: PostRequest) -> DomainResult<Post> {
        let request = request.sanitized();
        propagate!(DomainResult::from_result(
            request.check(&format!("{}update_post", LOCATION))
        ));
        propagate!(self.owned_post("update_post", user_id, post_id).await);

        let changes = PostChanges {
            title: request.title,
            content: request.content,
            image: request.image,
            updated_at: Utc::now(),
        };
        self.repository.update_post(post_id, changes).await
    }

    async fn delete_post_by_id(&self, user_id: &str, post_id: &str) -> DomainResult<()> {
        propagate!(self.owned_post("delete_post_by_id", user_id, post_id).await);
        self.repository.delete_post_by_id(post_id).await
    }
}
