//! # 애플리케이션 생명주기 관리
//!
//! ```text
//! Initializing ──▶ Running ──▶ ShuttingDown ──▶ Stopped
//!      │                            ▲
//!      └──── 치명적 오류 ────────────┘
//! ```
//!
//! - **Initializing**: Config → Logger → Repository(연결) → UseCase → Delivery 순서로 조립
//! - **Running**: 서버를 띄우고 종료 신호(SIGINT/SIGTERM)를 기다림
//! - **ShuttingDown**: 서버 종료 → 저장소 종료 → 완료 기록 및 flush (한 번만 실행)
//! - **Stopped**: 신호로 끝나면 [`ExitStatus::Clean`], 치명적 오류면 [`ExitStatus::Forced`]

use std::future::Future;
use std::sync::Arc;

use log::info;
use tokio::signal;

use crate::core::capabilities::Logger;
use crate::core::container::Container;
use crate::core::factory::ComponentFactory;
use crate::errors::domain::DomainError;
use crate::utils::display_terminal::{
    print_boxed_title, print_shutdown_summary, print_startup_summary, print_step_complete,
    print_step_start, print_sub_task,
};

const LOCATION: &str = "core.lifecycle.";
pub const SHUTDOWN_COMPLETED: &str = "Completed graceful shutdown of the app";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Initializing,
    Running,
    ShuttingDown,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// 종료 신호에 따른 정상 종료
    Clean,
    /// 초기화/기동 중 치명적 오류
    Forced,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Forced => 1,
        }
    }
}

pub struct Application<F: ComponentFactory> {
    factory: F,
    container: Container,
    state: LifecycleState,
}

impl<F: ComponentFactory> Application<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            container: Container::default(),
            state: LifecycleState::Initializing,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// 조립, 기동, 신호 대기, 종료까지 전체 수명을 실행합니다.
    pub async fn run<S>(&mut self, shutdown_signal: S) -> ExitStatus
    where
        S: Future<Output = ()>,
    {
        print_boxed_title("BLOG SERVICE STARTING");

        if self.initialize().await.is_err() {
            self.shutdown().await;
            print_shutdown_summary(ExitStatus::Forced.code());
            return ExitStatus::Forced;
        }

        if self.launch().await.is_err() {
            self.shutdown().await;
            print_shutdown_summary(ExitStatus::Forced.code());
            return ExitStatus::Forced;
        }

        self.state = LifecycleState::Running;
        shutdown_signal.await;
        info!("🛑 종료 신호 수신, 정상 종료를 시작합니다");

        self.shutdown().await;
        print_shutdown_summary(ExitStatus::Clean.code());
        ExitStatus::Clean
    }

    /// 구성 요소를 순서대로 만듭니다. 실패 시 이미 기록된 에러를 돌려줍니다.
    async fn initialize(&mut self) -> Result<(), DomainError> {
        self.state = LifecycleState::Initializing;

        print_step_start(1, "Config", "CONFIG_STRATEGY");
        let config = self.factory.new_config()?;
        self.container.config = Some(Arc::clone(&config));
        let app_config = config.get_config().clone();
        print_step_complete(1, "Config");

        print_step_start(2, "Logger", &app_config.core.logger);
        let logger = self.factory.new_logger(&app_config)?;
        self.container.logger = Some(Arc::clone(&logger));
        print_step_complete(2, "Logger");

        print_step_start(3, "Repository", &app_config.core.database);
        let repository = self.factory.new_repository(&app_config, Arc::clone(&logger))?;
        self.container.repository = Some(Arc::clone(&repository));
        let handle = repository
            .new_repository()
            .await
            .inspect_err(|error| logger.fatal(error))?;
        print_sub_task("Connection", "established");
        let user_repository = repository
            .new_user_repository(&handle)
            .inspect_err(|error| logger.fatal(error))?;
        let post_repository = repository
            .new_post_repository(&handle)
            .inspect_err(|error| logger.fatal(error))?;
        self.container.repository_handle = Some(handle);
        print_step_complete(3, "Repository");

        print_step_start(4, "UseCase", &app_config.core.use_case);
        let use_case = self.factory.new_use_case(&app_config, Arc::clone(&logger))?;
        self.container.user_use_case = Some(use_case.new_user_use_case(user_repository));
        self.container.post_use_case = Some(use_case.new_post_use_case(post_repository));
        print_step_complete(4, "UseCase");

        print_step_start(5, "Delivery", &app_config.core.delivery);
        let delivery = self.factory.new_delivery(&app_config, Arc::clone(&logger))?;
        self.container.delivery = Some(delivery);
        print_step_complete(5, "Delivery");

        Ok(())
    }

    async fn launch(&mut self) -> Result<(), DomainError> {
        let logger = self.logger();
        let delivery = self.container.delivery.clone().ok_or_else(|| {
            DomainError::internal(format!("{}launch", LOCATION), "delivery is not initialized")
        })?;

        delivery
            .launch_server(&self.container)
            .await
            .inspect_err(|error| logger.fatal(error))?;

        if let Ok(config) = self.container.require_config() {
            print_startup_summary(&config.server.bind_address(), &config.server.server_group);
        }
        Ok(())
    }

    /// 정상/강제 종료 공통 경로. 두 번째 호출부터는 아무 일도 하지 않습니다.
    pub async fn shutdown(&mut self) {
        if matches!(self.state, LifecycleState::ShuttingDown | LifecycleState::Stopped) {
            return;
        }
        self.state = LifecycleState::ShuttingDown;
        let logger = self.logger();

        if let Some(delivery) = self.container.delivery.clone() {
            if let Err(error) = delivery.close_server().await {
                logger.error(&error);
            }
        }

        if let Some(repository) = self.container.repository.clone() {
            if let Err(error) = repository.close_repository().await {
                logger.error(&error);
            }
        }

        logger.info(&DomainError::info(format!("{}shutdown", LOCATION), SHUTDOWN_COMPLETED));
        logger.flush();
        self.state = LifecycleState::Stopped;
    }

    fn logger(&self) -> Arc<dyn Logger> {
        self.container
            .logger
            .clone()
            .unwrap_or_else(|| self.factory.fallback_logger())
    }
}

/// SIGINT(Ctrl+C) 또는 SIGTERM을 기다립니다.
///
/// 핸들러 설치에 실패한 신호는 기다리지 않고 다른 신호만 기다립니다.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("❌ Ctrl+C 핸들러 설치 실패: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                log::error!("❌ SIGTERM 핸들러 설치 실패: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("SIGINT 수신"),
        _ = terminate => info!("SIGTERM 수신"),
    }
}
