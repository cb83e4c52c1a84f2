//! JSON 응답 봉투
//!
//! 모든 HTTP 응답은 같은 모양을 가집니다.
//!
//! ```json
//! { "status": "success", "data": { ... } }
//! { "status": "fail", "error": { "location": "...", "notification": "..." } }
//! { "status": "fail", "errors": [ { "field": "name", "type": "required", ... } ] }
//! ```

use serde::Serialize;

use crate::errors::http::{HttpError, HttpValidationError};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAIL: &str = "fail";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<HttpError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<HttpValidationError>>,
}

impl<T> JsonResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    /// 실패 봉투를 만듭니다. 내부 에러는 클라이언트용으로 정규화됩니다.
    pub fn fail(error: &HttpError) -> Self {
        match error.client_view() {
            HttpError::Validations(errors) => Self {
                status: STATUS_FAIL,
                data: None,
                error: None,
                errors: Some(errors),
            },
            view => Self {
                status: STATUS_FAIL,
                data: None,
                error: Some(view),
                errors: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::{
        notification, DomainError, FieldType, InternalError, ValidationError, ValidationErrors,
    };
    use crate::errors::http::handle_error;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let body = serde_json::to_value(JsonResponse::success(json!({ "name": "kim" }))).unwrap();
        assert_eq!(body, json!({ "status": "success", "data": { "name": "kim" } }));
    }

    #[test]
    fn test_validations_go_to_errors_list() {
        let error: DomainError = ValidationErrors::new(vec![
            ValidationError::new("l", "title", FieldType::Required, "a"),
            ValidationError::new("l", "image", FieldType::Optional, "b"),
        ])
        .into();

        let body = serde_json::to_value(JsonResponse::<()>::fail(&handle_error(&error))).unwrap();
        assert_eq!(body["status"], "fail");
        assert!(body.get("error").is_none());
        assert_eq!(body["errors"][0]["field"], "title");
        assert_eq!(body["errors"][1]["type"], "optional");
    }

    #[test]
    fn test_internal_error_body_is_masked() {
        let error: DomainError = InternalError::new("db.users.find", "connection reset").into();

        let body = serde_json::to_value(JsonResponse::<()>::fail(&handle_error(&error))).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "fail",
                "error": { "notification": notification::INTERNAL_ERROR_NOTIFICATION }
            })
        );
    }
}
