//! 요청 검증 → 도메인 검증 에러 변환
//!
//! `validator` derive 결과를 [`ValidationErrors`]로 바꿉니다.
//! 필드 순서는 각 타입이 선언한 `FIELDS` 순서를 따르고, 필드마다 처음 실패한 규칙의
//! 메시지 하나만 남깁니다.
//!
//! ```rust,ignore
//! impl OrderedValidation for RegisterUserRequest {
//!     const FIELDS: &'static [(&'static str, FieldType)] = &[
//!         ("name", FieldType::Required),
//!         ("email", FieldType::Required),
//!         ("password", FieldType::Required),
//!     ];
//! }
//!
//! propagate!(DomainResult::from_result(request.check("services.users.register")));
//! ```

use std::collections::BTreeMap;

use validator::Validate;

use crate::errors::domain::{notification, DomainError, FieldType, ValidationError, ValidationErrors};

pub const MIN_STRING_LENGTH: usize = 4;
pub const MAX_STRING_LENGTH: usize = 40;

pub trait OrderedValidation: Validate {
    /// 검증 결과를 보고할 필드와 순서
    const FIELDS: &'static [(&'static str, FieldType)];

    /// 필드 간 비교처럼 derive로 표현하기 어려운 추가 검사.
    /// 이미 실패한 필드에 대한 항목은 무시됩니다.
    fn cross_field_errors(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// 모든 규칙을 검사하고 실패가 있으면 `DomainError::Validations`를 반환합니다.
    fn check(&self, location: &str) -> Result<(), DomainError> {
        let mut first_messages: BTreeMap<String, String> = BTreeMap::new();

        if let Err(failures) = self.validate() {
            for (field, errors) in failures.field_errors() {
                if let Some(error) = errors.first() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    first_messages.insert(field.to_string(), message);
                }
            }
        }

        for (field, message) in self.cross_field_errors() {
            first_messages.entry(field.to_string()).or_insert(message);
        }

        let mut errors = ValidationErrors::default();
        for (field, field_type) in Self::FIELDS {
            if let Some(message) = first_messages.remove(*field) {
                errors.push(ValidationError::new(location, *field, *field_type, message));
            }
        }
        // 선언되지 않은 필드는 이름 순으로 뒤에 붙습니다.
        for (field, message) in first_messages {
            errors.push(ValidationError::new(location, field, FieldType::Required, message));
        }

        errors.into_result()
    }
}

/// 앞뒤 공백을 제거합니다.
pub fn sanitize(value: &str) -> String {
    value.trim().to_string()
}

/// 빈 값은 `None`으로 정리합니다.
pub fn sanitize_optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_string)
}

pub fn has_length(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// 길이 검사 실패 메시지를 가진 `validator` 에러
pub fn length_error(min: usize, max: usize) -> validator::ValidationError {
    validator::ValidationError::new("length").with_message(
        notification::string_allowed_length(min, max).into(),
    )
}

pub fn optional_length_error(max: usize) -> validator::ValidationError {
    validator::ValidationError::new("length").with_message(
        notification::string_optional_allowed_length(max).into(),
    )
}
