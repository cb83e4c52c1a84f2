//! HTTP 핸들러 모듈
//!
//! 핸들러는 요청을 DTO로 받아 유스케이스를 호출하고, 결과를 [`JsonResponse`] 봉투로 감쌉니다.
//! 실패는 [`AppState::fail`]에서 한 번 기록한 뒤 [`HttpError`]로 응답됩니다.
//!
//! - [`users`] - 사용자 가입/로그인/토큰 갱신/내 정보
//! - [`posts`] - 게시물 CRUD

use std::sync::Arc;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::core::capabilities::Logger;
use crate::domain::dto::JsonResponse;
use crate::errors::domain::{notification, DomainError};
use crate::errors::http::{handle_error, HttpError, HttpRequestError};
use crate::services::{PostUseCase, TokenService, UserUseCase};

pub mod posts;
pub mod users;

const LOCATION: &str = "handlers.";

/// 요청 처리에 필요한 공유 상태 (`web::Data`로 주입)
#[derive(Clone)]
pub struct AppState {
    pub user_use_case: Arc<dyn UserUseCase>,
    pub post_use_case: Arc<dyn PostUseCase>,
    pub token_service: TokenService,
    pub logger: Arc<dyn Logger>,
    pub server_group: String,
}

impl AppState {
    /// 도메인 에러를 기록하고 전송 뷰로 바꿉니다.
    ///
    /// 내부 에러는 `error`, 그 밖의 클라이언트 에러는 `warn` 레벨입니다.
    pub fn fail(&self, error: DomainError) -> HttpError {
        if error.is_internal() {
            self.logger.error(&error);
        } else {
            self.logger.warn(&error);
        }
        handle_error(&error)
    }
}

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(JsonResponse::success(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "server_group": state.server_group,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

/// 일치하는 라우트가 없을 때의 기본 서비스
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, HttpError> {
    Err(HttpError::Request(HttpRequestError::new(
        format!("{}not_found", LOCATION),
        "route",
        notification::route_not_found(req.path()),
        StatusCode::NOT_FOUND,
    )))
}

/// 본문 JSON 파싱 실패 → 400
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    HttpError::Request(HttpRequestError::new(
        format!("{}json_error_handler", LOCATION),
        "body",
        error.to_string(),
        StatusCode::BAD_REQUEST,
    ))
    .into()
}

/// 쿼리 문자열 파싱 실패 → 400
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    HttpError::Request(HttpRequestError::new(
        format!("{}query_error_handler", LOCATION),
        "query",
        error.to_string(),
        StatusCode::BAD_REQUEST,
    ))
    .into()
}
