//! 인증된 사용자 정보
//!
//! `AuthMiddleware`가 토큰을 검증한 뒤 요청 extensions에 넣어 두며,
//! 핸들러는 추출자(extractor)로 바로 받을 수 있습니다.
//!
//! ```rust,ignore
//! pub async fn get_me(user: AuthenticatedUser, state: web::Data<AppState>) -> impl Responder {
//!     state.user_use_case.get_user_by_id(&user.user_id).await
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::domain::notification;
use crate::errors::http::{HttpError, HttpRequestError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = HttpError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(HttpError::Request(HttpRequestError::new(
                "domain.models.auth.authenticated_user.from_request",
                "authorization",
                notification::LOGGING_ERROR_NOTIFICATION,
                StatusCode::UNAUTHORIZED,
            )))),
        }
    }
}
