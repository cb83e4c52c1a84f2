//! 애플리케이션 설정 스냅샷
//!
//! 시작 시 한 번 만들어져 참조로 전달되는 [`ApplicationConfig`]를 정의합니다.
//! 전역 변수 없이 `Config` 기능(capability)을 통해서만 노출됩니다.
//!
//! 모든 값은 키 조회 함수로부터 파싱되므로 테스트에서는 메모리 맵을,
//! 실행 시에는 환경 변수를 사용합니다.
//!
//! ```rust,ignore
//! let config = ApplicationConfig::from_env()?;
//! println!("database strategy: {}", config.core.database);
//! ```

use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::{error, warn};

use crate::errors::domain::{DomainError, InternalError};
use crate::utils::sync_set::OrderedSet;

const LOCATION: &str = "config.application_config.";
/// 토큰 만료 시간 상한 (1년)
const MAX_TOKEN_MINUTES: u64 = 60 * 24 * 365;

/// 지원하는 전략 이름
pub mod strategy {
    pub const CONFIG_DOTENV: &str = "Dotenv";
    pub const LOGGER_ENV_LOGGER: &str = "EnvLogger";
    pub const DATABASE_MONGODB: &str = "MongoDB";
    pub const USE_CASE_V1: &str = "UseCase";
    pub const DELIVERY_ACTIX: &str = "Actix";
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 환경 이름을 해석합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 bcrypt cost
    pub fn default_bcrypt_cost(&self) -> u32 {
        match self {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 각 기능(capability)의 전략 선택자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub logger: String,
    pub database: String,
    pub use_case: String,
    pub delivery: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub name: String,
    pub app_name: String,
}

/// HTTP 서버 바인딩 및 CORS 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// 모든 API 라우트의 접두 경로 (예: `/api/v1`)
    pub server_group: String,
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    /// 종료 시 처리 중인 요청을 기다리는 최대 시간
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst_size: u32,
}

/// JWT 서명 설정
#[derive(Clone, PartialEq, Eq)]
pub struct TokenConfig {
    pub secret: String,
    pub expired_in: Duration,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"***")
            .field("expired_in", &self.expired_in)
            .finish()
    }
}

/// 해석이 끝난 전체 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationConfig {
    pub environment: Environment,
    pub core: CoreConfig,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub access_token: TokenConfig,
    pub refresh_token: TokenConfig,
    /// 외부 호출(DB 등)에 적용되는 기본 타임아웃
    pub context_timeout: Duration,
}

impl ApplicationConfig {
    /// 프로세스 환경 변수로부터 설정을 읽습니다.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 메모리 맵으로부터 설정을 읽습니다.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, DomainError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// 키 조회 함수로부터 모든 섹션을 파싱합니다.
    ///
    /// # Errors
    ///
    /// * 프로덕션 환경에서 토큰 서명 키가 비어 있는 경우
    /// * bcrypt cost가 4-15 범위를 벗어난 경우
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let environment = Environment::from_name(&read("ENVIRONMENT", "production"));

        let core = CoreConfig {
            logger: read("CORE_LOGGER", strategy::LOGGER_ENV_LOGGER),
            database: read("CORE_DATABASE", strategy::DATABASE_MONGODB),
            use_case: read("CORE_USE_CASE", strategy::USE_CASE_V1),
            delivery: read("CORE_DELIVERY", strategy::DELIVERY_ACTIX),
        };

        let mongodb = MongoConfig {
            uri: read("MONGODB_URI", "mongodb://localhost:27017"),
            name: read("DATABASE_NAME", "blog_service_dev"),
            app_name: read("MONGODB_APP_NAME", "blog_service"),
        };

        let origins: OrderedSet<String> = read(
            "ALLOW_ORIGINS",
            "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080",
        )
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

        let server = ServerConfig {
            host: read("HOST", "127.0.0.1"),
            port: parse_or(&read("PORT", ""), "PORT", 8080),
            workers: parse_or(&read("SERVER_WORKERS", ""), "SERVER_WORKERS", 4),
            server_group: normalize_group(&read("SERVER_GROUP", "/api/v1")),
            allow_origins: origins.values(),
            allow_credentials: parse_or(&read("ALLOW_CREDENTIALS", ""), "ALLOW_CREDENTIALS", true),
            shutdown_timeout: Duration::from_secs(parse_or(
                &read("SHUTDOWN_TIMEOUT_SECONDS", ""),
                "SHUTDOWN_TIMEOUT_SECONDS",
                30,
            )),
        };

        let bcrypt_cost = parse_or(
            &read("BCRYPT_COST", ""),
            "BCRYPT_COST",
            environment.default_bcrypt_cost(),
        );
        if !(4..=15).contains(&bcrypt_cost) {
            return Err(InternalError::new(
                format!("{}from_lookup", LOCATION),
                format!("BCRYPT_COST must be between 4 and 15, got {}", bcrypt_cost),
            )
            .into());
        }

        let security = SecurityConfig {
            bcrypt_cost,
            rate_limit_per_second: parse_or(
                &read("RATE_LIMIT_PER_SECOND", ""),
                "RATE_LIMIT_PER_SECOND",
                100,
            ),
            rate_limit_burst_size: parse_or(
                &read("RATE_LIMIT_BURST_SIZE", ""),
                "RATE_LIMIT_BURST_SIZE",
                200,
            ),
        };

        let access_token = TokenConfig {
            secret: read_secret(&read("ACCESS_TOKEN_SECRET", ""), "ACCESS_TOKEN_SECRET", environment)?,
            expired_in: read_minutes(
                &read("ACCESS_TOKEN_EXPIRED_IN_MINUTES", ""),
                "ACCESS_TOKEN_EXPIRED_IN_MINUTES",
                15,
            )?,
        };

        let refresh_token = TokenConfig {
            secret: read_secret(&read("REFRESH_TOKEN_SECRET", ""), "REFRESH_TOKEN_SECRET", environment)?,
            expired_in: read_minutes(
                &read("REFRESH_TOKEN_EXPIRED_IN_MINUTES", ""),
                "REFRESH_TOKEN_EXPIRED_IN_MINUTES",
                60,
            )?,
        };

        let context_timeout = Duration::from_secs(parse_or(
            &read("CONTEXT_TIMEOUT_SECONDS", ""),
            "CONTEXT_TIMEOUT_SECONDS",
            5,
        ));

        Ok(Self {
            environment,
            core,
            mongodb,
            server,
            security,
            access_token,
            refresh_token,
            context_timeout,
        })
    }
}

/// 숫자/불리언 값을 파싱하고, 실패하면 기본값을 사용합니다.
fn parse_or<T>(raw: &str, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    if raw.is_empty() {
        return default;
    }

    raw.parse::<T>().unwrap_or_else(|e| {
        error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
        default
    })
}

/// 분 단위 값을 읽어 [`Duration`]으로 바꿉니다. 상한을 넘으면 에러입니다.
fn read_minutes(raw: &str, key: &str, default: u64) -> Result<Duration, DomainError> {
    let minutes = parse_or(raw, key, default);
    if minutes > MAX_TOKEN_MINUTES {
        return Err(InternalError::new(
            format!("{}read_minutes", LOCATION),
            format!("{} must be at most {}, got {}", key, MAX_TOKEN_MINUTES, minutes),
        )
        .into());
    }
    Ok(Duration::from_secs(minutes * 60))
}

fn read_secret(raw: &str, key: &str, environment: Environment) -> Result<String, DomainError> {
    if !raw.is_empty() {
        return Ok(raw.to_string());
    }

    if environment.is_production() {
        return Err(InternalError::new(
            format!("{}read_secret", LOCATION),
            format!("{} must be set in production", key),
        )
        .into());
    }

    warn!("{} not set, using default (not secure for production!)", key);
    Ok(format!("{}-development-secret", key.to_lowercase()))
}

fn normalize_group(group: &str) -> String {
    let trimmed = group.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("TEST"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(Environment::Development.default_bcrypt_cost(), 4);
        assert_eq!(Environment::Test.default_bcrypt_cost(), 4);
        assert_eq!(Environment::Staging.default_bcrypt_cost(), 10);
        assert_eq!(Environment::Production.default_bcrypt_cost(), 12);
    }

    #[test]
    fn test_defaults_in_test_environment() {
        let config = ApplicationConfig::from_map(&values(&[("ENVIRONMENT", "test")])).unwrap();

        assert_eq!(config.core.logger, "EnvLogger");
        assert_eq!(config.core.database, "MongoDB");
        assert_eq!(config.core.use_case, "UseCase");
        assert_eq!(config.core.delivery, "Actix");
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.server_group, "/api/v1");
        assert_eq!(config.server.shutdown_timeout, Duration::from_secs(30));
        assert_eq!(config.security.bcrypt_cost, 4);
        assert_eq!(config.access_token.expired_in, Duration::from_secs(15 * 60));
        assert_eq!(config.refresh_token.expired_in, Duration::from_secs(60 * 60));
        assert_eq!(config.context_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_strategy_selectors_are_read_verbatim() {
        let config = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "dev"),
            ("CORE_DATABASE", "MongoDB1"),
            ("CORE_DELIVERY", "Gin"),
        ]))
        .unwrap();

        assert_eq!(config.core.database, "MongoDB1");
        assert_eq!(config.core.delivery, "Gin");
    }

    #[test]
    fn test_allow_origins_are_deduplicated_in_order() {
        let config = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "test"),
            ("ALLOW_ORIGINS", "http://b.dev, http://a.dev,http://b.dev,,http://c.dev"),
        ]))
        .unwrap();

        assert_eq!(
            config.server.allow_origins,
            vec!["http://b.dev", "http://a.dev", "http://c.dev"]
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "test"),
            ("PORT", "eighty"),
            ("CONTEXT_TIMEOUT_SECONDS", "-1"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.context_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_token_lifetime_above_limit_is_rejected() {
        let config = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "test"),
            ("ACCESS_TOKEN_EXPIRED_IN_MINUTES", "18446744073709551615"),
        ]));
        match config {
            Err(DomainError::Internal(error)) => {
                assert_eq!(error.base.location, "config.application_config.read_minutes");
                assert!(error.base.notification.contains("ACCESS_TOKEN_EXPIRED_IN_MINUTES"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let config = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "test"),
            ("REFRESH_TOKEN_EXPIRED_IN_MINUTES", "525600"),
        ]))
        .unwrap();
        assert_eq!(config.refresh_token.expired_in, Duration::from_secs(525_600 * 60));
    }

    #[test]
    fn test_production_requires_token_secrets() {
        let missing = ApplicationConfig::from_map(&values(&[("ENVIRONMENT", "production")]));
        assert!(matches!(missing, Err(DomainError::Internal(_))));

        let present = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "production"),
            ("ACCESS_TOKEN_SECRET", "a"),
            ("REFRESH_TOKEN_SECRET", "r"),
        ]))
        .unwrap();
        assert_eq!(present.security.bcrypt_cost, 12);
        assert_eq!(present.access_token.secret, "a");
    }

    #[test]
    fn test_bcrypt_cost_out_of_range_is_rejected() {
        let result = ApplicationConfig::from_map(&values(&[
            ("ENVIRONMENT", "test"),
            ("BCRYPT_COST", "31"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_server_group_is_normalized() {
        assert_eq!(normalize_group("api/v2/"), "/api/v2");
        assert_eq!(normalize_group("/api"), "/api");
    }
}
