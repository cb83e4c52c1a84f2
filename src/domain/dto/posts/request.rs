//! 게시물 생성/수정 요청 DTO
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::validation::{
    has_length, length_error, optional_length_error, sanitize, sanitize_optional, OrderedValidation,
    MAX_STRING_LENGTH, MIN_STRING_LENGTH,
};
use crate::errors::domain::FieldType;

pub const MAX_CONTENT_LENGTH: usize = 4000;
pub const MAX_IMAGE_LENGTH: usize = 200;

/// 생성과 수정이 같은 본문을 사용합니다 (전체 교체).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[validate(custom(function = "validate_content"))]
    pub content: String,

    #[validate(custom(function = "validate_image"))]
    #[serde(default)]
    pub image: Option<String>,
}

pub type CreatePostRequest = PostRequest;
pub type UpdatePostRequest = PostRequest;

impl PostRequest {
    pub fn sanitized(&self) -> Self {
        Self {
            title: sanitize(&self.title),
            content: sanitize(&self.content),
            image: sanitize_optional(self.image.as_deref()),
        }
    }
}

impl OrderedValidation for PostRequest {
    const FIELDS: &'static [(&'static str, FieldType)] = &[
        ("title", FieldType::Required),
        ("content", FieldType::Required),
        ("image", FieldType::Optional),
    ];
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if !has_length(title, MIN_STRING_LENGTH, MAX_STRING_LENGTH) {
        return Err(length_error(MIN_STRING_LENGTH, MAX_STRING_LENGTH));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
    if !has_length(content, MIN_STRING_LENGTH, MAX_CONTENT_LENGTH) {
        return Err(length_error(MIN_STRING_LENGTH, MAX_CONTENT_LENGTH));
    }
    Ok(())
}

fn validate_image(image: &str) -> Result<(), ValidationError> {
    if image.chars().count() > MAX_IMAGE_LENGTH {
        return Err(optional_length_error(MAX_IMAGE_LENGTH));
    }
    Ok(())
}
