//! 전략 이름으로 구성 요소를 선택하는 팩토리
//!
//! 설정의 `core` 섹션(설정 기능은 `CONFIG_STRATEGY`)에 적힌 이름을 알려진 전략과 비교해
//! 구현체를 만듭니다. 알 수 없는 이름은 치명적 오류로, 한 번만 `fatal`로 기록한 뒤
//! `Err`를 돌려주고 생명주기 관리자가 종료를 진행합니다.
//!
//! | 기능 | 전략 | 구현 |
//! |------|------|------|
//! | config | `Dotenv` | [`EnvConfig`] |
//! | logger | `EnvLogger` | [`ConsoleLogger`] |
//! | repository | `MongoDB` | [`MongoRepository`] |
//! | use case | `UseCase` | [`ServiceUseCase`] |
//! | delivery | `Actix` | [`ActixDelivery`] |

use std::sync::Arc;

use crate::config::application_config::{strategy, ApplicationConfig};
use crate::config::env_config::EnvConfig;
use crate::core::capabilities::{Config, Delivery, Logger, Repository, UseCase};
use crate::delivery::ActixDelivery;
use crate::errors::domain::{DomainError, InternalError};
use crate::logger::ConsoleLogger;
use crate::repositories::MongoRepository;
use crate::services::ServiceUseCase;

const LOCATION: &str = "core.factory.";

/// 생명주기 관리자가 구성 요소를 얻는 통로
pub trait ComponentFactory: Send + Sync {
    fn new_config(&self) -> Result<Arc<dyn Config>, DomainError>;

    fn new_logger(&self, config: &ApplicationConfig) -> Result<Arc<dyn Logger>, DomainError>;

    fn new_repository(
        &self,
        config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Repository>, DomainError>;

    fn new_use_case(
        &self,
        config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn UseCase>, DomainError>;

    fn new_delivery(
        &self,
        config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Delivery>, DomainError>;

    /// 로거가 만들어지기 전(또는 만들지 못했을 때) 사용할 로거
    fn fallback_logger(&self) -> Arc<dyn Logger>;
}

pub struct Factory {
    config_strategy: String,
    fallback: Arc<dyn Logger>,
}

impl Factory {
    pub fn new(config_strategy: impl Into<String>) -> Self {
        Self::with_fallback_logger(config_strategy, Arc::new(ConsoleLogger::new()))
    }

    pub fn with_fallback_logger(config_strategy: impl Into<String>, fallback: Arc<dyn Logger>) -> Self {
        Self {
            config_strategy: config_strategy.into(),
            fallback,
        }
    }

    /// 지원하지 않는 전략: 한 번 기록하고 에러를 돌려줍니다.
    fn unsupported(&self, logger: &dyn Logger, function: &str, kind: &str, name: &str) -> DomainError {
        let error: DomainError = InternalError::new(
            format!("{}{}", LOCATION, function),
            format!("unsupported {} type: {}", kind, name),
        )
        .into();
        logger.fatal(&error);
        error
    }
}

impl ComponentFactory for Factory {
    fn new_config(&self) -> Result<Arc<dyn Config>, DomainError> {
        match self.config_strategy.as_str() {
            strategy::CONFIG_DOTENV => {
                let config = EnvConfig::new().inspect_err(|error| self.fallback.fatal(error))?;
                Ok(Arc::new(config))
            }
            other => Err(self.unsupported(self.fallback.as_ref(), "new_config", "config", other)),
        }
    }

    fn new_logger(&self, config: &ApplicationConfig) -> Result<Arc<dyn Logger>, DomainError> {
        match config.core.logger.as_str() {
            strategy::LOGGER_ENV_LOGGER => Ok(Arc::new(ConsoleLogger::new())),
            other => Err(self.unsupported(self.fallback.as_ref(), "new_logger", "logger", other)),
        }
    }

    fn new_repository(
        &self,
        config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Repository>, DomainError> {
        match config.core.database.as_str() {
            strategy::DATABASE_MONGODB => Ok(Arc::new(MongoRepository::new(
                config.mongodb.clone(),
                config.context_timeout,
                logger,
            ))),
            other => Err(self.unsupported(logger.as_ref(), "new_repository", "repository", other)),
        }
    }

    fn new_use_case(
        &self,
        config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn UseCase>, DomainError> {
        match config.core.use_case.as_str() {
            strategy::USE_CASE_V1 => Ok(Arc::new(ServiceUseCase::new(config.security.bcrypt_cost))),
            other => Err(self.unsupported(logger.as_ref(), "new_use_case", "use case", other)),
        }
    }

    fn new_delivery(
        &self,
        config: &ApplicationConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Arc<dyn Delivery>, DomainError> {
        match config.core.delivery.as_str() {
            strategy::DELIVERY_ACTIX => Ok(Arc::new(ActixDelivery::new(config, logger))),
            other => Err(self.unsupported(logger.as_ref(), "new_delivery", "delivery", other)),
        }
    }

    fn fallback_logger(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mocks::{test_config, RecordingLogger};

    fn factory() -> (Factory, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        (Factory::with_fallback_logger("Dotenv", logger.clone()), logger)
    }

    #[test]
    fn test_mongodb_strategy_builds_repository_without_logging() {
        let (factory, logger) = factory();
        let config = test_config(&[]);

        assert!(factory.new_repository(&config, logger.clone()).is_ok());
        assert!(logger.records().is_empty());
    }

    #[test]
    fn test_unknown_repository_strategy_is_fatal_once() {
        let (factory, logger) = factory();
        let config = test_config(&[("CORE_DATABASE", "MongoDB1")]);

        let error = match factory.new_repository(&config, logger.clone()) {
            Err(error) => error,
            Ok(_) => panic!("MongoDB1 must not build a repository"),
        };

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "fatal");
        assert_eq!(records[0].1, error);
        match error {
            DomainError::Internal(error) => {
                assert_eq!(error.base.location, "core.factory.new_repository");
                assert_eq!(error.base.notification, "unsupported repository type: MongoDB1");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_each_capability_names_its_kind() {
        let (factory, logger) = factory();
        let config = test_config(&[
            ("CORE_LOGGER", "Syslog"),
            ("CORE_USE_CASE", "UseCase2"),
            ("CORE_DELIVERY", "Gin"),
        ]);

        assert!(factory.new_logger(&config).is_err());
        assert!(factory.new_use_case(&config, logger.clone()).is_err());
        assert!(factory.new_delivery(&config, logger.clone()).is_err());
        assert!(
            Factory::with_fallback_logger("Yaml", logger.clone())
                .new_config()
                .is_err()
        );

        let notifications: Vec<String> = logger
            .records()
            .into_iter()
            .map(|(_, error)| error.to_string())
            .collect();
        assert_eq!(notifications.len(), 4);
        assert!(notifications[0].contains("unsupported logger type: Syslog"));
        assert!(notifications[1].contains("unsupported use case type: UseCase2"));
        assert!(notifications[2].contains("unsupported delivery type: Gin"));
        assert!(notifications[3].contains("unsupported config type: Yaml"));
    }

    #[test]
    fn test_known_strategies_build() {
        let (factory, logger) = factory();
        let config = test_config(&[]);

        assert!(factory.new_logger(&config).is_ok());
        assert!(factory.new_use_case(&config, logger.clone()).is_ok());
        assert!(factory.new_delivery(&config, logger.clone()).is_ok());
        assert!(logger.records().is_empty());
    }
}
