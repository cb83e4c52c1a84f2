//! # Error Taxonomy Module
//!
//! 계층을 가로지르는 에러 모델입니다. 실패 지점에서 만들어진 도메인 에러는
//! [`DomainResult`](crate::core::result::DomainResult)에 담겨 그대로 위로 전달되고,
//! 각 계층 경계에서 **변환(never mutate)**됩니다.
//!
//! ```text
//! DomainError ──handle_error──▶ HttpError ──handle_http_error──▶ JsonError
//!  (domain)                      (응답 본문)                      (구조화 로그)
//! ```
//!
//! - [`domain`] - 닫힌 에러 분류 체계와 알림 문구
//! - [`http`] - 전송 뷰, 상태 코드, `actix_web::ResponseError`
//! - [`json`] - 로깅용 JSON 뷰

pub mod domain;
pub mod http;
pub mod json;

pub use domain::*;
pub use http::{handle_error, HttpError};
pub use json::{handle_http_error, JsonError};
