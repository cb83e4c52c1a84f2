//! `users` 컬렉션 문서
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::to_chrono;
use crate::domain::models::users::{NewUser, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub verified: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<NewUser> for UserDocument {
    fn from(user: NewUser) -> Self {
        Self {
            id: None,
            name: user.name,
            email: user.email,
            password: user.password_hash,
            role: user.role,
            verified: user.verified,
            created_at: DateTime::from_millis(user.created_at.timestamp_millis()),
            updated_at: DateTime::from_millis(user.updated_at.timestamp_millis()),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            user_id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: document.name,
            email: document.email,
            password_hash: document.password,
            role: document.role,
            verified: document.verified,
            created_at: to_chrono(document.created_at),
            updated_at: to_chrono(document.updated_at),
        }
    }
}
