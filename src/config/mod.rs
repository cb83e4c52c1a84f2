//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수를 한 번 해석하여 불변 스냅샷 [`ApplicationConfig`]를 만들고,
//! 이후에는 `Config` 기능을 통해 참조로만 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`application_config`] - 설정 스냅샷과 섹션별 구조체, 파싱 규칙
//! - [`env_config`] - `.env` 파일 로드와 "Dotenv" 설정 전략
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export ENVIRONMENT="production"
//! export MONGODB_URI="mongodb://mongo:27017"
//! export ACCESS_TOKEN_SECRET="your-access-secret"
//! export REFRESH_TOKEN_SECRET="your-refresh-secret"
//! ```
//!
//! ### 전략 선택
//!
//! ```bash
//! export CONFIG_STRATEGY="Dotenv"
//! export CORE_LOGGER="EnvLogger"
//! export CORE_DATABASE="MongoDB"
//! export CORE_USE_CASE="UseCase"
//! export CORE_DELIVERY="Actix"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_GROUP="/api/v1"
//! export ALLOW_ORIGINS="http://localhost:3000,http://localhost:8080"
//! export BCRYPT_COST="12"              # 4-15 범위
//! export SHUTDOWN_TIMEOUT_SECONDS="30"
//! export CONTEXT_TIMEOUT_SECONDS="5"
//! ```

pub mod application_config;
pub mod env_config;

pub use application_config::*;
pub use env_config::{load_env_file, EnvConfig};
