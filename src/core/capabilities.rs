//! 교체 가능한 구성 요소(capability) 계약
//!
//! 애플리케이션은 다섯 가지 기능으로 조립됩니다.
//!
//! | 기능 | 책임 | 기본 전략 |
//! |------|------|-----------|
//! | [`Config`] | 읽기 전용 설정 스냅샷 제공 | `Dotenv` |
//! | [`Logger`] | 도메인 에러/정보의 레벨별 기록 | `EnvLogger` |
//! | [`Repository`] | 저장소 연결 및 도메인 리포지토리 생성 | `MongoDB` |
//! | [`UseCase`] | 리포지토리로부터 유스케이스 생성 | `UseCase` |
//! | [`Delivery`] | 전송 계층 서버 기동/종료 | `Actix` |
//!
//! 구현체는 [`Factory`](crate::core::factory::Factory)가 설정의 전략 이름으로 선택하고,
//! [`Container`]가 프로세스 수명 동안 소유합니다.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::application_config::ApplicationConfig;
use crate::core::container::Container;
use crate::errors::domain::DomainError;
use crate::repositories::{PostRepository, UserRepository};
use crate::services::{PostUseCase, UserUseCase};

/// 설정 스냅샷 제공자
pub trait Config: Send + Sync {
    fn get_config(&self) -> &ApplicationConfig;
}

/// 레벨별 로거
///
/// 어떤 메서드도 값을 반환하거나 패닉하지 않습니다. `fatal`과 `panic`도 기록만 하며,
/// 실제 종료는 호출자가 반환한 `Err`를 생명주기 관리자가 처리합니다.
pub trait Logger: Send + Sync {
    fn trace(&self, error: &DomainError);
    fn debug(&self, error: &DomainError);
    fn info(&self, error: &DomainError);
    fn warn(&self, error: &DomainError);
    fn error(&self, error: &DomainError);
    fn fatal(&self, error: &DomainError);
    fn panic(&self, error: &DomainError);
    /// 버퍼에 남은 기록을 내보냅니다.
    fn flush(&self);
}

/// 저장소 연결을 감싼 불투명 핸들
///
/// 저장소 구현마다 연결 타입이 다르므로 타입을 지워서 보관하고,
/// 같은 구현이 `downcast`로 다시 꺼내 씁니다.
#[derive(Clone)]
pub struct RepositoryHandle(Arc<dyn Any + Send + Sync>);

impl RepositoryHandle {
    pub fn new<T: Any + Send + Sync>(connection: T) -> Self {
        Self(Arc::new(connection))
    }

    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.0).downcast::<T>().ok()
    }
}

impl std::fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RepositoryHandle(..)")
    }
}

#[async_trait]
pub trait Repository: Send + Sync {
    /// 저장소에 연결하고 상태를 확인합니다 (타임아웃 적용).
    async fn new_repository(&self) -> Result<RepositoryHandle, DomainError>;

    /// 연결을 닫습니다. 연결된 적이 없으면 아무 일도 하지 않습니다.
    async fn close_repository(&self) -> Result<(), DomainError>;

    fn new_user_repository(
        &self,
        handle: &RepositoryHandle,
    ) -> Result<Arc<dyn UserRepository>, DomainError>;

    fn new_post_repository(
        &self,
        handle: &RepositoryHandle,
    ) -> Result<Arc<dyn PostRepository>, DomainError>;
}

pub trait UseCase: Send + Sync {
    fn new_user_use_case(&self, repository: Arc<dyn UserRepository>) -> Arc<dyn UserUseCase>;

    fn new_post_use_case(&self, repository: Arc<dyn PostRepository>) -> Arc<dyn PostUseCase>;
}

#[async_trait]
pub trait Delivery: Send + Sync {
    /// 서버를 바인딩하고 서비스 루프를 백그라운드로 띄웁니다. 블로킹하지 않습니다.
    async fn launch_server(&self, container: &Container) -> Result<(), DomainError>;

    /// 새 연결을 받지 않고 처리 중인 요청이 끝날 때까지(최대 drain 기한) 기다립니다.
    async fn close_server(&self) -> Result<(), DomainError>;
}
