//! 사용자 도메인 모델

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::pagination::PaginationResponse;

/// 가입 시 부여되는 기본 역할
pub const USER_ROLE: &str = "user";

/// 조회된 사용자
///
/// 비밀번호 해시는 로그인 검증에만 쓰이며 직렬화되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub role: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Users {
    pub users: Vec<User>,
    pub pagination: PaginationResponse,
}

/// 저장 직전의 신규 사용자 (검증 및 해싱 완료)
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            email,
            password_hash,
            role: USER_ROLE.to_string(),
            verified: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 사용자 정보 변경분
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub name: String,
    pub updated_at: DateTime<Utc>,
}
