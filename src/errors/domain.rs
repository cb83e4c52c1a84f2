//! 도메인 에러 분류 체계
//!
//! 영속성 계층과 도메인 계층에서 발생하는 모든 실패를 표현하는 닫힌 에러 집합입니다.
//! 모든 에러는 공통 레코드 [`BaseError`] (`location` + `notification`)를 **포함(composition)**하고,
//! 종류별 추가 필드를 가집니다.
//!
//! ## 에러 종류
//!
//! | 종류 | 추가 필드 | HTTP 상태 |
//! |------|-----------|-----------|
//! | [`ValidationError`] | `field`, `field_type` | 400 |
//! | [`ValidationErrors`] | 순서가 보존되는 `ValidationError` 목록 | 400 |
//! | [`AuthorizationError`] | - | 403 |
//! | [`InvalidTokenError`] | - | 401 |
//! | [`TimeExpiredError`] | - | 401 |
//! | [`ItemNotFoundError`] | `query` | 404 |
//! | [`PaginationError`] | `current_page`, `total_pages` (location 없음) | 400 |
//! | [`InternalError`] | - | 500 |
//! | [`InfoMessage`] | - (에러가 아닌 정보성 이벤트) | 200 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::domain::{DomainError, ItemNotFoundError, notification};
//!
//! let error: DomainError = ItemNotFoundError::new(
//!     "repositories.users.get_user_by_id",
//!     "_id: 507f1f77bcf86cd799439011",
//!     notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
//! ).into();
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 사용자에게 노출되는 알림 문구
pub mod notification {
    pub const INTERNAL_ERROR_NOTIFICATION: &str =
        "Oops! Something went wrong on our end. Please try again later or contact our support team for assistance.";
    pub const ITEM_NOT_FOUND_ERROR_NOTIFICATION: &str =
        "Sorry, the requested item does not exist in our records.";
    pub const PAGINATION_ERROR_NOTIFICATION: &str =
        "Sorry, there was an issue with the pagination request. Please check your parameters and try again.";
    pub const AUTHORIZATION_ERROR_NOTIFICATION: &str =
        "Access denied. You do not have the required permissions to perform this action. Please try again or contact our support team for assistance.";
    pub const EMAIL_ALREADY_EXISTS_NOTIFICATION: &str =
        "An account with this email address already exists.";
    pub const TIME_EXPIRED_ERROR_NOTIFICATION: &str =
        "Sorry, the time is expired and not valid anymore";
    pub const INVALID_TOKEN_ERROR_NOTIFICATION: &str =
        "The token is invalid. Please use the correct token.";
    pub const INVALID_EMAIL_OR_PASSWORD_NOTIFICATION: &str = "Invalid email or password.";
    pub const LOGGING_ERROR_NOTIFICATION: &str = "You are not logged in.";
    pub const ALREADY_LOGGED_IN_NOTIFICATION: &str =
        "You are already registered, and registration is not allowed for existing users.";

    pub fn route_not_found(path: &str) -> String {
        format!("The requested URL '{}' was not found on this server.", path)
    }

    pub fn string_allowed_length(min: usize, max: usize) -> String {
        format!("Can be between {} and {} characters long.", min, max)
    }

    pub fn string_optional_allowed_length(max: usize) -> String {
        format!("Cannot be more than {} characters.", max)
    }
}

/// 모든 에러 종류가 포함하는 공통 레코드
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("location: {location} notification: {notification}")]
pub struct BaseError {
    /// 점(.)으로 구분된 호출 경로 (예: `services.users.register`)
    pub location: String,
    /// 사람이 읽을 수 있는 메시지
    pub notification: String,
}

impl BaseError {
    pub fn new(location: impl Into<String>, notification: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            notification: notification.into(),
        }
    }
}

/// 검증 대상 필드의 필수 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Required,
    Optional,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Required => "required",
            FieldType::Optional => "optional",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 필드 검증 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{base} field: {field} type: {field_type}")]
pub struct ValidationError {
    pub base: BaseError,
    pub field: String,
    pub field_type: FieldType,
}

impl ValidationError {
    pub fn new(
        location: impl Into<String>,
        field: impl Into<String>,
        field_type: FieldType,
        notification: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseError::new(location, notification),
            field: field.into(),
            field_type,
        }
    }
}

/// 일괄 검증에서 수집된 실패 목록
///
/// 검증이 수행된 순서대로 저장되며, 이 순서는 응답과 테스트의 결정성을 위해 유지됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// 실패가 하나라도 있으면 `Err`로 변환합니다.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validations(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join(": ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

macro_rules! base_error_kind {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Error, Debug, Clone, PartialEq, Eq)]
        #[error("{base}")]
        pub struct $name {
            pub base: BaseError,
        }

        impl $name {
            pub fn new(location: impl Into<String>, notification: impl Into<String>) -> Self {
                Self {
                    base: BaseError::new(location, notification),
                }
            }
        }
    };
}

base_error_kind!(
    /// 인증/권한 실패
    AuthorizationError
);
base_error_kind!(
    /// 형식이 잘못되었거나 서명이 맞지 않는 토큰
    InvalidTokenError
);
base_error_kind!(
    /// 만료된 토큰 또는 세션
    TimeExpiredError
);
base_error_kind!(
    /// 예상하지 못한 시스템 오류
    InternalError
);
base_error_kind!(
    /// 에러가 아닌 정보성 이벤트 (예: 종료 알림)
    InfoMessage
);

/// 조회 결과 없음
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{base} query: {query}")]
pub struct ItemNotFoundError {
    pub base: BaseError,
    pub query: String,
}

impl ItemNotFoundError {
    pub fn new(
        location: impl Into<String>,
        query: impl Into<String>,
        notification: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseError::new(location, notification),
            query: query.into(),
        }
    }
}

/// 범위를 벗어난 페이지 요청
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("current page: {current_page} total pages: {total_pages} notification: {notification}")]
pub struct PaginationError {
    pub current_page: u64,
    pub total_pages: u64,
    pub notification: String,
}

impl PaginationError {
    pub fn new(current_page: u64, total_pages: u64, notification: impl Into<String>) -> Self {
        Self {
            current_page,
            total_pages,
            notification: notification.into(),
        }
    }
}

/// 도메인 에러 합 타입
///
/// 새 종류를 추가하면 `errors::http::handle_error`와
/// `errors::json::handle_http_error`의 `match`가 컴파일되지 않으므로
/// 두 매퍼를 함께 갱신해야 합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Validations(#[from] ValidationErrors),
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
    #[error(transparent)]
    InvalidToken(#[from] InvalidTokenError),
    #[error(transparent)]
    TimeExpired(#[from] TimeExpiredError),
    #[error(transparent)]
    ItemNotFound(#[from] ItemNotFoundError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Internal(#[from] InternalError),
    #[error(transparent)]
    Info(#[from] InfoMessage),
}

impl DomainError {
    /// 외부 라이브러리 에러를 내부 에러로 변환합니다.
    pub fn internal(location: impl Into<String>, error: impl fmt::Display) -> Self {
        InternalError::new(location, error.to_string()).into()
    }

    pub fn info(location: impl Into<String>, notification: impl Into<String>) -> Self {
        InfoMessage::new(location, notification).into()
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Internal(_))
    }

    /// 위치 정보가 있는 종류라면 `location`을 반환합니다.
    pub fn location(&self) -> Option<&str> {
        match self {
            DomainError::Validation(error) => Some(&error.base.location),
            DomainError::Validations(_) | DomainError::Pagination(_) => None,
            DomainError::Authorization(error) => Some(&error.base.location),
            DomainError::InvalidToken(error) => Some(&error.base.location),
            DomainError::TimeExpired(error) => Some(&error.base.location),
            DomainError::ItemNotFound(error) => Some(&error.base.location),
            DomainError::Internal(error) => Some(&error.base.location),
            DomainError::Info(error) => Some(&error.base.location),
        }
    }
}
