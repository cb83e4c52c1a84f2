//! `posts` 컬렉션 문서
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::to_chrono;
use crate::domain::models::posts::{NewPost, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub user: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<NewPost> for PostDocument {
    fn from(post: NewPost) -> Self {
        Self {
            id: None,
            user_id: post.user_id,
            user: post.user,
            title: post.title,
            content: post.content,
            image: post.image,
            created_at: DateTime::from_millis(post.created_at.timestamp_millis()),
            updated_at: DateTime::from_millis(post.updated_at.timestamp_millis()),
        }
    }
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            post_id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: document.user_id,
            user: document.user,
            title: document.title,
            content: document.content,
            image: document.image,
            created_at: to_chrono(document.created_at),
            updated_at: to_chrono(document.updated_at),
        }
    }
}
