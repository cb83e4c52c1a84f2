//! 인증 요청 DTO
use serde::Deserialize;
use validator::Validate;

use crate::domain::dto::users::request::create_user_request::{validate_email, validate_password};
use crate::domain::validation::{sanitize, OrderedValidation};
use crate::errors::domain::FieldType;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl LoginRequest {
    pub fn sanitized(&self) -> Self {
        Self {
            email: sanitize(&self.email).to_lowercase(),
            password: sanitize(&self.password),
        }
    }
}

impl OrderedValidation for LoginRequest {
    const FIELDS: &'static [(&'static str, FieldType)] =
        &[("email", FieldType::Required), ("password", FieldType::Required)];
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "A refresh token is required."))]
    pub refresh_token: String,
}

impl OrderedValidation for RefreshTokenRequest {
    const FIELDS: &'static [(&'static str, FieldType)] = &[("refresh_token", FieldType::Required)];
}
