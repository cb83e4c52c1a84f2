//! # Core Module
//!
//! 애플리케이션 조립과 수명 관리를 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`capabilities`] - 교체 가능한 다섯 가지 기능의 계약 (Config, Logger, Repository, UseCase, Delivery)
//! - [`factory`] - 설정의 전략 이름으로 구현체 선택
//! - [`container`] - 조립된 구성 요소 보관
//! - [`lifecycle`] - 초기화, 실행, 정상/강제 종료 상태 기계
//! - [`result`] - 모든 계층이 공유하는 결과 컨테이너
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! let factory = Factory::new(std::env::var("CONFIG_STRATEGY").unwrap_or_else(|_| "Dotenv".into()));
//! let mut application = Application::new(factory);
//! let status = application.run(shutdown_signal()).await;
//! std::process::exit(status.code());
//! ```

pub mod capabilities;
pub mod container;
pub mod factory;
pub mod lifecycle;
pub mod result;

#[cfg(test)]
pub mod mocks;

pub use capabilities::{Config, Delivery, Logger, Repository, RepositoryHandle, UseCase};
pub use container::Container;
pub use factory::{ComponentFactory, Factory};
pub use lifecycle::{shutdown_signal, Application, ExitStatus, LifecycleState};
pub use result::DomainResult;
