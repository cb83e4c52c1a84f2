//! 조립된 구성 요소 보관소
//!
//! 초기화가 어느 단계에서 실패하더라도 그때까지 만들어진 구성 요소만 정리할 수 있도록
//! 모든 필드는 `Option`입니다. 조립이 끝난 뒤에는 읽기 전용으로 공유됩니다.

use std::sync::Arc;

use crate::config::application_config::ApplicationConfig;
use crate::core::capabilities::{Config, Delivery, Logger, Repository, RepositoryHandle};
use crate::errors::domain::{DomainError, InternalError};
use crate::services::{PostUseCase, UserUseCase};

const LOCATION: &str = "core.container.";

#[derive(Clone, Default)]
pub struct Container {
    pub config: Option<Arc<dyn Config>>,
    pub logger: Option<Arc<dyn Logger>>,
    pub repository: Option<Arc<dyn Repository>>,
    pub repository_handle: Option<RepositoryHandle>,
    pub user_use_case: Option<Arc<dyn UserUseCase>>,
    pub post_use_case: Option<Arc<dyn PostUseCase>>,
    pub delivery: Option<Arc<dyn Delivery>>,
}

fn missing(function: &str, component: &str) -> DomainError {
    InternalError::new(
        format!("{}{}", LOCATION, function),
        format!("{} is not initialized", component),
    )
    .into()
}

impl Container {
    pub fn require_config(&self) -> Result<&ApplicationConfig, DomainError> {
        self.config
            .as_ref()
            .map(|config| config.get_config())
            .ok_or_else(|| missing("require_config", "config"))
    }

    pub fn require_logger(&self) -> Result<Arc<dyn Logger>, DomainError> {
        self.logger.clone().ok_or_else(|| missing("require_logger", "logger"))
    }

    pub fn require_user_use_case(&self) -> Result<Arc<dyn UserUseCase>, DomainError> {
        self.user_use_case
            .clone()
            .ok_or_else(|| missing("require_user_use_case", "user use case"))
    }

    pub fn require_post_use_case(&self) -> Result<Arc<dyn PostUseCase>, DomainError> {
        self.post_use_case
            .clone()
            .ok_or_else(|| missing("require_post_use_case", "post use case"))
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("config", &self.config.is_some())
            .field("logger", &self.logger.is_some())
            .field("repository", &self.repository.is_some())
            .field("repository_handle", &self.repository_handle.is_some())
            .field("user_use_case", &self.user_use_case.is_some())
            .field("post_use_case", &self.post_use_case.is_some())
            .field("delivery", &self.delivery.is_some())
            .finish()
    }
}
