//! `.env` 파일 기반 설정 전략 ("Dotenv")
//!
//! PROFILE 환경변수에 맞는 `.env` 파일을 프로세스 환경에 로드한 뒤
//! [`ApplicationConfig`]를 한 번 해석하여 보관합니다.

use dotenv::dotenv;
use log::{error, info};

use crate::config::application_config::ApplicationConfig;
use crate::core::capabilities::Config;
use crate::errors::domain::DomainError;

/// 환경 변수로부터 만들어진 설정 기능
#[derive(Debug, Clone)]
pub struct EnvConfig {
    config: ApplicationConfig,
}

impl EnvConfig {
    /// 현재 프로세스 환경으로부터 설정을 해석합니다.
    pub fn new() -> Result<Self, DomainError> {
        let config = ApplicationConfig::from_env()?;
        info!("⚙️ 설정 로드 완료 (environment: {:?})", config.environment);
        Ok(Self { config })
    }

    pub fn from_config(config: ApplicationConfig) -> Self {
        Self { config }
    }
}

impl Config for EnvConfig {
    fn get_config(&self) -> &ApplicationConfig {
        &self.config
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실패하지 않습니다. 이미 설정된 환경 변수가 그대로 사용됩니다.
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_config_exposes_snapshot() {
        let values: HashMap<String, String> =
            [("ENVIRONMENT".to_string(), "test".to_string())].into_iter().collect();
        let snapshot = ApplicationConfig::from_map(&values).unwrap();

        let config = EnvConfig::from_config(snapshot.clone());
        assert_eq!(config.get_config(), &snapshot);
    }
}
