//! 게시물 도메인 모델

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::pagination::PaginationResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Post {
    pub post_id: String,
    pub user_id: String,
    /// 작성자 이름
    pub user: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Posts {
    pub posts: Vec<Post>,
    pub pagination: PaginationResponse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub user_id: String,
    pub user: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 게시물 변경분 (제목/본문/이미지 전체 교체)
#[derive(Debug, Clone, PartialEq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}
