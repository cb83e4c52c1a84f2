//! 도메인 에러 → HTTP 전송 뷰 매핑
//!
//! [`handle_error`]는 모든 [`DomainError`] 종류를 전송 계층 표현인 [`HttpError`]로
//! 변환하는 순수 함수입니다. `match`에 와일드카드가 없으므로 새 에러 종류가 추가되면
//! 컴파일 단계에서 누락이 드러납니다.
//!
//! [`HttpError`]는 `actix_web::ResponseError`를 구현하므로 핸들러에서
//! `Result<HttpResponse, HttpError>`로 바로 반환할 수 있습니다.
//!
//! ## 응답 본문
//!
//! ```json
//! {
//!   "status": "fail",
//!   "errors": [
//!     { "location": "services.users.register", "field": "email", "type": "required",
//!       "notification": "An account with this email address already exists." }
//!   ]
//! }
//! ```
//!
//! 내부 에러(500)는 응답 본문에서 `location`을 제거하고 일반 안내 문구로 정규화합니다.
//! 원래 값은 로깅용 JSON 뷰(`errors::json`)에 그대로 남습니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::dto::json_response::JsonResponse;
use crate::errors::domain::{notification, BaseError, DomainError, FieldType, ValidationError};

fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// `location` + `notification`만 가지는 전송 뷰
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpBaseError {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    pub notification: String,
}

impl From<&BaseError> for HttpBaseError {
    fn from(base: &BaseError) -> Self {
        Self {
            location: base.location.clone(),
            notification: base.notification.clone(),
        }
    }
}

/// 필드 단위 검증 실패 뷰
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpValidationError {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub notification: String,
}

impl From<&ValidationError> for HttpValidationError {
    fn from(error: &ValidationError) -> Self {
        Self {
            location: error.base.location.clone(),
            field: error.field.clone(),
            field_type: error.field_type,
            notification: error.base.notification.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpItemNotFoundError {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    pub notification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpPaginationError {
    #[serde(skip_serializing_if = "is_zero")]
    pub current_page: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub total_pages: u64,
    pub notification: String,
}

/// 라우팅/요청 파싱 실패 (전송 계층 전용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpRequestError {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_type: String,
    pub notification: String,
    #[serde(skip)]
    pub status: u16,
}

impl HttpRequestError {
    pub fn new(
        location: impl Into<String>,
        request_type: impl Into<String>,
        notification: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            location: location.into(),
            request_type: request_type.into(),
            notification: notification.into(),
            status: status.as_u16(),
        }
    }
}

/// HTTP 전송 뷰
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HttpError {
    Validation(HttpValidationError),
    Validations(Vec<HttpValidationError>),
    Authorization(HttpBaseError),
    InvalidToken(HttpBaseError),
    TimeExpired(HttpBaseError),
    ItemNotFound(HttpItemNotFoundError),
    Pagination(HttpPaginationError),
    Request(HttpRequestError),
    Internal(HttpBaseError),
    Info(HttpBaseError),
}

/// 도메인 에러를 전송 뷰로 변환합니다.
pub fn handle_error(error: &DomainError) -> HttpError {
    match error {
        DomainError::Validation(error) => HttpError::Validation(error.into()),
        DomainError::Validations(errors) => {
            HttpError::Validations(errors.iter().map(HttpValidationError::from).collect())
        }
        DomainError::Authorization(error) => HttpError::Authorization((&error.base).into()),
        DomainError::InvalidToken(error) => HttpError::InvalidToken((&error.base).into()),
        DomainError::TimeExpired(error) => HttpError::TimeExpired((&error.base).into()),
        DomainError::ItemNotFound(error) => HttpError::ItemNotFound(HttpItemNotFoundError {
            location: error.base.location.clone(),
            query: error.query.clone(),
            notification: error.base.notification.clone(),
        }),
        DomainError::Pagination(error) => HttpError::Pagination(HttpPaginationError {
            current_page: error.current_page,
            total_pages: error.total_pages,
            notification: error.notification.clone(),
        }),
        DomainError::Internal(error) => HttpError::Internal((&error.base).into()),
        DomainError::Info(error) => HttpError::Info((&error.base).into()),
    }
}

impl From<&DomainError> for HttpError {
    fn from(error: &DomainError) -> Self {
        handle_error(error)
    }
}

impl From<DomainError> for HttpError {
    fn from(error: DomainError) -> Self {
        handle_error(&error)
    }
}

impl HttpError {
    pub fn internal(location: impl Into<String>, notification: impl Into<String>) -> Self {
        HttpError::Internal(HttpBaseError {
            location: location.into(),
            notification: notification.into(),
        })
    }

    /// 클라이언트에게 내려갈 형태로 변환합니다.
    ///
    /// 내부 에러는 호출 경로를 노출하지 않도록 일반 안내 문구만 남깁니다.
    pub fn client_view(&self) -> HttpError {
        match self {
            HttpError::Internal(_) => HttpError::Internal(HttpBaseError {
                location: String::new(),
                notification: notification::INTERNAL_ERROR_NOTIFICATION.to_string(),
            }),
            other => other.clone(),
        }
    }

    pub fn notification(&self) -> String {
        match self {
            HttpError::Validation(error) => error.notification.clone(),
            HttpError::Validations(errors) => errors
                .iter()
                .map(|error| error.notification.as_str())
                .collect::<Vec<_>>()
                .join(": "),
            HttpError::Authorization(error)
            | HttpError::InvalidToken(error)
            | HttpError::TimeExpired(error)
            | HttpError::Internal(error)
            | HttpError::Info(error) => error.notification.clone(),
            HttpError::ItemNotFound(error) => error.notification.clone(),
            HttpError::Pagination(error) => error.notification.clone(),
            HttpError::Request(error) => error.notification.clone(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notification())
    }
}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::Validation(_) | HttpError::Validations(_) | HttpError::Pagination(_) => {
                StatusCode::BAD_REQUEST
            }
            HttpError::InvalidToken(_) | HttpError::TimeExpired(_) => StatusCode::UNAUTHORIZED,
            HttpError::Authorization(_) => StatusCode::FORBIDDEN,
            HttpError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Request(error) => {
                StatusCode::from_u16(error.status).unwrap_or(StatusCode::BAD_REQUEST)
            }
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::Info(_) => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonResponse::<()>::fail(self))
    }
}
