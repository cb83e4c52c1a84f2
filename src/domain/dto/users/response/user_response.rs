//! 사용자 응답 DTO
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::pagination::PaginationResponse;
use crate::domain::models::token::TokenPair;
use crate::domain::models::users::{User, Users};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            user_id,
            name,
            email,
            role,
            verified,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            user_id,
            name,
            email,
            role,
            verified,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
    pub pagination: PaginationResponse,
}

impl From<Users> for UsersResponse {
    fn from(users: Users) -> Self {
        Self {
            users: users.users.into_iter().map(UserResponse::from).collect(),
            pagination: users.pagination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

impl LoginResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            tokens,
        }
    }
}
