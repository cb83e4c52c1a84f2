//! 블로그 서비스 백엔드
//!
//! 사용자와 게시물을 관리하는 REST API 서비스입니다.
//! 설정, 로거, 저장소, 유스케이스, 전송 계층을 교체 가능한 기능(capability)으로 나누고,
//! 설정에 적힌 전략 이름으로 팩토리가 구현을 골라 조립합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 로그인, 내 정보 수정/탈퇴, 페이지 조회
//! - **게시물 관리**: 작성자만 수정/삭제할 수 있는 게시물 CRUD
//! - **JWT 인증**: 액세스/리프레시 토큰 (HS256)
//! - **도메인 에러**: 종류별 HTTP 상태와 `{"status", "data"|"error"}` 봉투
//! - **우아한 종료**: 전송 계층 → 저장소 → 로거 순서로 한 번만 정리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Lifecycle     │ ← 조립 / 시그널 대기 / 종료
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Delivery(Actix) │ ← routes → middlewares → handlers
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserUseCase / PostUseCase
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blog_service_backend::core::{shutdown_signal, Application, Factory};
//!
//! let mut application = Application::new(Factory::new("Dotenv"));
//! let status = application.run(shutdown_signal()).await;
//! std::process::exit(status.code());
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod delivery;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
