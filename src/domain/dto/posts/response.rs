//! 게시물 응답 DTO
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::pagination::PaginationResponse;
use crate::domain::models::posts::{Post, Posts};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostResponse {
    pub post_id: String,
    pub user_id: String,
    pub user: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            user_id: post.user_id,
            user: post.user,
            title: post.title,
            content: post.content,
            image: post.image,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<PostResponse>,
    pub pagination: PaginationResponse,
}

impl From<Posts> for PostsResponse {
    fn from(posts: Posts) -> Self {
        Self {
            posts: posts.posts.into_iter().map(PostResponse::from).collect(),
            pagination: posts.pagination,
        }
    }
}
