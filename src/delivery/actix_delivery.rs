//! "Actix" 전송 기능
//!
//! HTTP 서버를 구성해 백그라운드로 띄우고, 종료 시 처리 중인 요청을
//! `shutdown_timeout`까지 기다린 뒤 멈춥니다. 시그널은 생명주기 관리자가 받으므로
//! actix 자체 시그널 처리는 끕니다.

use std::sync::{Arc, Mutex, PoisonError};

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use async_trait::async_trait;

use crate::config::application_config::{ApplicationConfig, SecurityConfig, ServerConfig, TokenConfig};
use crate::core::capabilities::{Delivery, Logger};
use crate::core::container::Container;
use crate::errors::domain::{DomainError, InternalError};
use crate::handlers::{self, AppState};
use crate::routes::configure_all_routes;
use crate::services::TokenService;

const LOCATION: &str = "delivery.actix_delivery.";
const ANY_ORIGIN: &str = "*";

pub struct ActixDelivery {
    server: ServerConfig,
    security: SecurityConfig,
    access_token: TokenConfig,
    refresh_token: TokenConfig,
    logger: Arc<dyn Logger>,
    handle: Mutex<Option<ServerHandle>>,
}

impl ActixDelivery {
    pub fn new(config: &ApplicationConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            server: config.server.clone(),
            security: config.security.clone(),
            access_token: config.access_token.clone(),
            refresh_token: config.refresh_token.clone(),
            logger,
            handle: Mutex::new(None),
        }
    }

    fn app_state(&self, container: &Container) -> Result<AppState, DomainError> {
        Ok(AppState {
            user_use_case: container.require_user_use_case()?,
            post_use_case: container.require_post_use_case()?,
            token_service: TokenService::new(self.access_token.clone(), self.refresh_token.clone()),
            logger: Arc::clone(&self.logger),
            server_group: self.server.server_group.clone(),
        })
    }
}

/// 설정된 Origin 목록으로 CORS 미들웨어를 구성합니다.
///
/// `*`가 포함되면 모든 Origin을 허용합니다.
fn configure_cors(origins: &[String], allow_credentials: bool) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    if origins.iter().any(|origin| origin == ANY_ORIGIN) {
        cors = cors.allow_any_origin();
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }

    if allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}

#[async_trait]
impl Delivery for ActixDelivery {
    async fn launch_server(&self, container: &Container) -> Result<(), DomainError> {
        let location = format!("{}launch_server", LOCATION);
        let state = web::Data::new(self.app_state(container)?);

        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(self.security.rate_limit_per_second)
            .burst_size(self.security.rate_limit_burst_size)
            .use_headers()
            .finish()
            .ok_or_else(|| {
                DomainError::from(InternalError::new(
                    location.as_str(),
                    "invalid rate limit configuration",
                ))
            })?;

        log::info!(
            "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
            self.security.rate_limit_per_second,
            self.security.rate_limit_burst_size
        );

        let origins = self.server.allow_origins.clone();
        let allow_credentials = self.server.allow_credentials;
        let server_group = self.server.server_group.clone();
        let bind_address = self.server.bind_address();

        let server = HttpServer::new(move || {
            let group = server_group.clone();

            App::new()
                // Rate Limiting 미들웨어 (가장 먼저 적용)
                .wrap(Governor::new(&governor_conf))
                .wrap(configure_cors(&origins, allow_credentials))
                .wrap(middleware::Logger::default())
                .wrap(middleware::NormalizePath::trim())
                .app_data(state.clone())
                .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(handlers::query_error_handler))
                .configure(move |cfg| configure_all_routes(cfg, &group))
                .default_service(web::to(handlers::not_found))
        })
        .workers(self.server.workers)
        .shutdown_timeout(self.server.shutdown_timeout.as_secs())
        .disable_signals()
        .bind(&bind_address)
        .map_err(|e| DomainError::internal(location.as_str(), format!("{}: {}", bind_address, e)))?
        .run();

        *self.handle.lock().unwrap_or_else(PoisonError::into_inner) = Some(server.handle());
        actix_web::rt::spawn(server);

        self.logger.info(&DomainError::info(
            location,
            format!("Server is listening on {}", bind_address),
        ));
        Ok(())
    }

    async fn close_server(&self) -> Result<(), DomainError> {
        let handle = self.handle.lock().unwrap_or_else(PoisonError::into_inner).take();

        if let Some(handle) = handle {
            handle.stop(true).await;
            self.logger.info(&DomainError::info(
                format!("{}close_server", LOCATION),
                "Server is stopped...",
            ));
        }
        Ok(())
    }
}
