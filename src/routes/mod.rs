//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 서버 그룹(기본 `/api/v1`) 아래에 등록됩니다.
//!
//! ## 인증 불필요 (Public 라우트)
//! - `GET /health`
//! - `GET /users`, `GET /users/{user_id}`, `GET /users/email/{email}`, `POST /users/refresh`
//! - `GET /posts`, `GET /posts/{post_id}`
//!
//! ## 토큰이 없어야 하는 라우트 (Anonymous)
//! - `POST /users/register`, `POST /users/login`
//!
//! ## 인증 필요 (Bearer)
//! - `GET|PUT|DELETE /users/me`
//! - `POST /posts`, `PUT|DELETE /posts/{post_id}`
//!
//! # Examples
//!
//! ```rust,ignore
//! let app = App::new()
//!     .app_data(state)
//!     .configure(|cfg| configure_all_routes(cfg, "/api/v1"))
//!     .default_service(web::to(handlers::not_found));
//! ```

use actix_web::web;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 서버 그룹 아래에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, server_group: &str) {
    cfg.service(
        web::scope(server_group)
            .service(handlers::health)
            .service(user_routes())
            .service(post_routes()),
    );
}

/// 사용자 라우트
///
/// `/me`, `/register`, `/login` 스코프와 `/email/{email}`은 `/{user_id}`보다 먼저 등록되어야 합니다.
fn user_routes() -> actix_web::Scope {
    web::scope("/users")
        .service(
            web::scope("/me")
                .wrap(AuthMiddleware::required())
                .service(handlers::users::get_me)
                .service(handlers::users::update_me)
                .service(handlers::users::delete_me),
        )
        .service(
            web::scope("/register")
                .wrap(AuthMiddleware::anonymous())
                .service(handlers::users::register),
        )
        .service(
            web::scope("/login")
                .wrap(AuthMiddleware::anonymous())
                .service(handlers::users::login),
        )
        .service(handlers::users::refresh)
        .service(handlers::users::get_all_users)
        .service(handlers::users::get_user_by_email)
        .service(handlers::users::get_user_by_id)
}

/// 게시물 라우트
///
/// 조회는 공개, 쓰기는 빈 경로 스코프에 인증 미들웨어를 걸어 분리합니다.
fn post_routes() -> actix_web::Scope {
    web::scope("/posts")
        .service(handlers::posts::get_all_posts)
        .service(handlers::posts::get_post_by_id)
        .service(
            web::scope("")
                .wrap(AuthMiddleware::required())
                .service(handlers::posts::create_post)
                .service(handlers::posts::update_post)
                .service(handlers::posts::delete_post),
        )
}
