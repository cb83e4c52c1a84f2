//! 사용자 생성/수정 요청 DTO
//!
//! 가입과 이름 변경 요청의 입력 정리(trim, 이메일 소문자화)와 검증 규칙을 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::validation::{
    has_length, length_error, sanitize, OrderedValidation, MAX_STRING_LENGTH, MIN_STRING_LENGTH,
};
use crate::errors::domain::FieldType;

const NAME_ALLOWED_CHARACTERS: &str =
    "Sorry, only letters (a-z), numbers (0-9), hyphens, underscores and spaces are allowed.";
const EMAIL_INVALID: &str =
    "Sorry, only letters (a-z), numbers (0-9) and periods (.) are allowed, you cannot use a period in the end and more than one in a row.";
const PASSWORD_ALLOWED_CHARACTERS: &str =
    "Sorry, only letters (a-z), numbers (0-9), the asterisk, comma, period, hyphen and underscore characters are allowed.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    pub password_confirm: String,
}

impl CreateUserRequest {
    /// 공백을 제거하고 이메일을 소문자로 맞춘 사본을 반환합니다.
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize(&self.name),
            email: sanitize(&self.email).to_lowercase(),
            password: sanitize(&self.password),
            password_confirm: sanitize(&self.password_confirm),
        }
    }
}

impl OrderedValidation for CreateUserRequest {
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("name", FieldType::Required),
        ("email", FieldType::Required),
        ("password", FieldType::Required),
    ];

    fn cross_field_errors(&self) -> Vec<(&'static str, String)> {
        if self.password != self.password_confirm {
            return vec![("password", PASSWORDS_DO_NOT_MATCH.to_string())];
        }
        Vec::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

impl UpdateUserRequest {
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize(&self.name),
        }
    }
}

impl OrderedValidation for UpdateUserRequest {
    const FIELDS: &'static [(&'static str, FieldType)] = &[("name", FieldType::Required)];
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !has_length(name, MIN_STRING_LENGTH, MAX_STRING_LENGTH) {
        return Err(length_error(MIN_STRING_LENGTH, MAX_STRING_LENGTH));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ' ')
    {
        return Err(ValidationError::new("invalid_name").with_message(NAME_ALLOWED_CHARACTERS.into()));
    }
    Ok(())
}

pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !has_length(email, MIN_STRING_LENGTH, MAX_STRING_LENGTH) {
        return Err(length_error(MIN_STRING_LENGTH, MAX_STRING_LENGTH));
    }
    if !email.validate_email() || email.ends_with('.') || email.contains("..") {
        return Err(ValidationError::new("invalid_email").with_message(EMAIL_INVALID.into()));
    }
    Ok(())
}

pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !has_length(password, MIN_STRING_LENGTH, MAX_STRING_LENGTH) {
        return Err(length_error(MIN_STRING_LENGTH, MAX_STRING_LENGTH));
    }
    if !password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_*,.".contains(c))
    {
        return Err(ValidationError::new("invalid_password")
            .with_message(PASSWORD_ALLOWED_CHARACTERS.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::DomainError;

    fn request(name: &str, email: &str, password: &str, confirm: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            password_confirm: confirm.into(),
        }
    }

    #[test]
    fn test_sanitized_trims_and_lowercases_email() {
        let clean = request("  Kim Lee ", " Kim@Example.COM ", " secret1 ", "secret1").sanitized();
        assert_eq!(clean.name, "Kim Lee");
        assert_eq!(clean.email, "kim@example.com");
        assert_eq!(clean.password, "secret1");
        assert!(clean.check("test").is_ok());
    }

    #[test]
    fn test_every_failing_field_is_reported_in_order() {
        let invalid = request("ab", "not-an-email", "pw", "pw");

        match invalid.check("services.users.register") {
            Err(DomainError::Validations(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "email", "password"]);
                assert_eq!(errors.iter().nth(1).unwrap().base.notification, EMAIL_INVALID);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_password_mismatch_is_reported_on_password() {
        match request("valid name", "a@b.com", "secret1", "secret2").check("l") {
            Err(DomainError::Validations(errors)) => {
                assert_eq!(errors.len(), 1);
                let error = errors.iter().next().unwrap();
                assert_eq!(error.field, "password");
                assert_eq!(error.base.notification, PASSWORDS_DO_NOT_MATCH);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_length_rule_wins_over_mismatch() {
        match request("valid name", "a@b.com", "pw", "other").check("l") {
            Err(DomainError::Validations(errors)) => {
                let error = errors.iter().next().unwrap();
                assert_eq!(error.base.notification, "Can be between 4 and 40 characters long.");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_name_with_symbols_is_rejected() {
        let update = UpdateUserRequest { name: "drop; table".into() };
        assert!(matches!(update.check("l"), Err(DomainError::Validations(_))));
    }
}
