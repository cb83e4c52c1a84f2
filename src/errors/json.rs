//! HTTP 전송 뷰 → 로깅용 JSON 뷰 매핑
//!
//! 전송 뷰와 같은 필드 구조를 유지하면서 `kind` 태그를 추가해 구조화 로그로 출력합니다.
//! 클라이언트 응답과는 독립적이며, 내부 에러의 `location`도 그대로 보존됩니다.

use serde::Serialize;

use crate::errors::domain::FieldType;
use crate::errors::http::{
    HttpBaseError, HttpError, HttpItemNotFoundError, HttpPaginationError, HttpRequestError,
    HttpValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonBaseError {
    pub location: String,
    pub notification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonValidationError {
    pub location: String,
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub notification: String,
}

/// 로깅용 JSON 뷰
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsonError {
    Validation(JsonValidationError),
    Validations {
        errors: Vec<JsonValidationError>,
    },
    Authorization(JsonBaseError),
    InvalidToken(JsonBaseError),
    TimeExpired(JsonBaseError),
    ItemNotFound {
        location: String,
        query: String,
        notification: String,
    },
    Pagination {
        current_page: u64,
        total_pages: u64,
        notification: String,
    },
    Request {
        location: String,
        request_type: String,
        notification: String,
    },
    Internal(JsonBaseError),
    Info(JsonBaseError),
}

fn base(view: &HttpBaseError) -> JsonBaseError {
    JsonBaseError {
        location: view.location.clone(),
        notification: view.notification.clone(),
    }
}

fn validation(view: &HttpValidationError) -> JsonValidationError {
    JsonValidationError {
        location: view.location.clone(),
        field: view.field.clone(),
        field_type: view.field_type,
        notification: view.notification.clone(),
    }
}

/// 전송 뷰를 로깅용 JSON 뷰로 변환합니다.
pub fn handle_http_error(error: &HttpError) -> JsonError {
    match error {
        HttpError::Validation(view) => JsonError::Validation(validation(view)),
        HttpError::Validations(views) => JsonError::Validations {
            errors: views.iter().map(validation).collect(),
        },
        HttpError::Authorization(view) => JsonError::Authorization(base(view)),
        HttpError::InvalidToken(view) => JsonError::InvalidToken(base(view)),
        HttpError::TimeExpired(view) => JsonError::TimeExpired(base(view)),
        HttpError::ItemNotFound(HttpItemNotFoundError {
            location,
            query,
            notification,
        }) => JsonError::ItemNotFound {
            location: location.clone(),
            query: query.clone(),
            notification: notification.clone(),
        },
        HttpError::Pagination(HttpPaginationError {
            current_page,
            total_pages,
            notification,
        }) => JsonError::Pagination {
            current_page: *current_page,
            total_pages: *total_pages,
            notification: notification.clone(),
        },
        HttpError::Request(HttpRequestError {
            location,
            request_type,
            notification,
            ..
        }) => JsonError::Request {
            location: location.clone(),
            request_type: request_type.clone(),
            notification: notification.clone(),
        },
        HttpError::Internal(view) => JsonError::Internal(base(view)),
        HttpError::Info(view) => JsonError::Info(base(view)),
    }
}

impl JsonError {
    /// 한 줄 JSON 문자열로 직렬화합니다.
    pub fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"kind\":\"internal\",\"notification\":\"log serialization failed: {}\"}}", e)
        })
    }
}
