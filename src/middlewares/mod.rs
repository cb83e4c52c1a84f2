//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Required`: Bearer 액세스 토큰을 검증하고 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//!   request extension에 저장합니다.
//! - `Anonymous`: 이미 토큰을 가진 요청(가입/로그인 재시도)을 403으로 거절합니다.
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! web::scope("/users")
//!     .service(web::scope("/me").wrap(AuthMiddleware::required()).service(get_me))
//!     .service(web::scope("/register").wrap(AuthMiddleware::anonymous()).service(register))
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{AuthMiddleware, AuthMode};
