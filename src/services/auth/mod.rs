//! 인증 토큰 서비스 모듈
//!
//! 액세스/리프레시 JWT 발급과 검증을 담당합니다.

pub mod token_service;

pub use token_service::TokenService;
