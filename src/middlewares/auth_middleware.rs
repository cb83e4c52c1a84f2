//! JWT 인증 미들웨어
//!
//! 토큰 검증은 [`AppState`](crate::handlers::AppState)의 `TokenService`로 하며,
//! 실패는 다른 핸들러와 같은 `fail` 봉투로 응답합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 유효한 액세스 토큰이 있어야 통과
    Required,
    /// 토큰이 없어야 통과
    Anonymous,
}

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    pub fn anonymous() -> Self {
        Self::new(AuthMode::Anonymous)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::domain::models::users::User;
    use crate::handlers::test_support::{app_state, token_service};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn open() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn sample_user() -> User {
        User {
            user_id: "64b7f0c2a1b2c3d4e5f60718".into(),
            name: "tester".into(),
            email: "tester@example.com".into(),
            role: "user".into(),
            ..User::default()
        }
    }

    #[actix_web::test]
    async fn test_required_passes_user_to_handler() {
        let (state, _) = app_state();
        let app = test::init_service(
            App::new().app_data(state).service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let token = token_service().generate_access_token(&sample_user()).unwrap();
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "64b7f0c2a1b2c3d4e5f60718");
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_and_bad_tokens() {
        let (state, logger) = app_state();
        let app = test::init_service(
            App::new().app_data(state).service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(logger.count("warn"), 2);
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_an_access_token() {
        let (state, _) = app_state();
        let app = test::init_service(
            App::new().app_data(state).service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let token = token_service().generate_refresh_token(&sample_user()).unwrap();
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_anonymous_rejects_bearer_requests() {
        let (state, _) = app_state();
        let app = test::init_service(
            App::new().app_data(state).service(
                web::scope("/login")
                    .wrap(AuthMiddleware::anonymous())
                    .route("", web::post().to(open)),
            ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::post().uri("/login").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header((header::AUTHORIZATION, "Bearer anything"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
