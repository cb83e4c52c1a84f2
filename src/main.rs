//! 블로그 서비스 메인 애플리케이션
//!
//! 환경 파일과 로깅을 준비한 뒤 생명주기 관리자에게 조립/기동/종료를 맡깁니다.
//! 종료 코드는 정상 종료 0, 강제 종료 1입니다.

use env_logger::Env;
use log::info;

use blog_service_backend::config::application_config::strategy;
use blog_service_backend::config::load_env_file;
use blog_service_backend::core::{shutdown_signal, Application, Factory};

#[actix_web::main]
async fn main() {
    load_env_file();
    init_logging();

    info!("🚀 블로그 서비스 시작중...");

    let config_strategy =
        std::env::var("CONFIG_STRATEGY").unwrap_or_else(|_| strategy::CONFIG_DOTENV.to_string());

    let mut application = Application::new(Factory::new(config_strategy));
    let status = application.run(shutdown_signal()).await;

    std::process::exit(status.code());
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=blog_service=debug,blog_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
