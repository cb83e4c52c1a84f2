//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::domain::{notification, AuthorizationError, InvalidTokenError};
use crate::errors::http::HttpError;
use crate::handlers::AppState;
use crate::middlewares::auth_middleware::AuthMode;

const LOCATION: &str = "middlewares.auth_inner.";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let mode = self.mode;

        Box::pin(async move {
            let outcome = match req.app_data::<web::Data<AppState>>() {
                Some(state) => authorize(&req, state, mode),
                None => Err(HttpError::internal(
                    format!("{}call", LOCATION),
                    "application state is not registered",
                )),
            };

            match outcome {
                Ok(Some(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Ok(None) => {}
                Err(error) => {
                    let response = error.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 모드에 따라 요청을 통과시키거나 거절합니다.
fn authorize(
    req: &ServiceRequest,
    state: &AppState,
    mode: AuthMode,
) -> Result<Option<AuthenticatedUser>, HttpError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match mode {
        AuthMode::Required => {
            let auth_header = auth_header.ok_or_else(|| {
                state.fail(
                    InvalidTokenError::new(
                        format!("{}authorize", LOCATION),
                        notification::LOGGING_ERROR_NOTIFICATION,
                    )
                    .into(),
                )
            })?;

            let token = state
                .token_service
                .extract_bearer_token(auth_header)
                .map_err(|e| state.fail(e))?;
            let claims = state
                .token_service
                .verify_access_token(token)
                .map_err(|e| state.fail(e))?;

            Ok(Some(AuthenticatedUser {
                user_id: claims.sub,
                role: claims.role,
            }))
        }
        AuthMode::Anonymous => match auth_header {
            Some(value) if value.starts_with("Bearer ") => Err(state.fail(
                AuthorizationError::new(
                    format!("{}authorize", LOCATION),
                    notification::ALREADY_LOGGED_IN_NOTIFICATION,
                )
                .into(),
            )),
            _ => Ok(None),
        },
    }
}
