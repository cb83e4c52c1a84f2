//! "EnvLogger" 로거 전략
//!
//! 도메인 에러를 전송 뷰와 로그 뷰로 차례로 변환한 뒤 한 줄 JSON으로 `log` 파사드에 기록합니다.
//! 실제 출력 형식과 필터는 `main`에서 초기화한 `env_logger`가 결정합니다.
//!
//! ```text
//! DomainError → HttpError → JsonError → log::log!(level, "{json}")
//! ```

use log::{log, Level};

use crate::core::capabilities::Logger;
use crate::errors::domain::DomainError;
use crate::errors::http::handle_error;
use crate::errors::json::handle_http_error;

const TARGET: &str = "blog_service";
const FATAL_MARKER: &str = "💀 FATAL";
const PANIC_MARKER: &str = "🔥 PANIC";

#[derive(Debug, Default, Clone)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    /// 로그에 기록될 한 줄 JSON
    pub fn format_line(error: &DomainError) -> String {
        handle_http_error(&handle_error(error)).to_log_line()
    }

    fn emit(&self, level: Level, marker: Option<&str>, error: &DomainError) {
        let line = Self::format_line(error);
        match marker {
            Some(marker) => log!(target: TARGET, level, "{} {}", marker, line),
            None => log!(target: TARGET, level, "{}", line),
        }
    }
}

impl Logger for ConsoleLogger {
    fn trace(&self, error: &DomainError) {
        self.emit(Level::Trace, None, error);
    }

    fn debug(&self, error: &DomainError) {
        self.emit(Level::Debug, None, error);
    }

    fn info(&self, error: &DomainError) {
        self.emit(Level::Info, None, error);
    }

    fn warn(&self, error: &DomainError) {
        self.emit(Level::Warn, None, error);
    }

    fn error(&self, error: &DomainError) {
        self.emit(Level::Error, None, error);
    }

    fn fatal(&self, error: &DomainError) {
        self.emit(Level::Error, Some(FATAL_MARKER), error);
    }

    fn panic(&self, error: &DomainError) {
        self.emit(Level::Error, Some(PANIC_MARKER), error);
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::{InternalError, ItemNotFoundError, PaginationError};
    use serde_json::Value;

    #[test]
    fn test_line_keeps_kind_specific_fields() {
        let error: DomainError =
            ItemNotFoundError::new("repositories.posts.get_post_by_id", "_id: 42", "missing").into();
        let line: Value = serde_json::from_str(&ConsoleLogger::format_line(&error)).unwrap();

        assert_eq!(line["kind"], "item_not_found");
        assert_eq!(line["location"], "repositories.posts.get_post_by_id");
        assert_eq!(line["query"], "_id: 42");
        assert_eq!(line["notification"], "missing");

        let error: DomainError = PaginationError::new(7, 3, "too far").into();
        let line: Value = serde_json::from_str(&ConsoleLogger::format_line(&error)).unwrap();
        assert_eq!(line["current_page"], 7);
        assert_eq!(line["total_pages"], 3);
    }

    #[test]
    fn test_internal_location_is_kept_in_logs() {
        let error: DomainError = InternalError::new("core.factory.new_repository", "boom").into();
        let line = ConsoleLogger::format_line(&error);

        assert!(line.contains("core.factory.new_repository"));
        assert!(line.contains("boom"));
    }

    #[test]
    fn test_every_level_is_callable_without_logger_installed() {
        let logger = ConsoleLogger::new();
        let error = DomainError::info("tests", "hello");

        logger.trace(&error);
        logger.debug(&error);
        logger.info(&error);
        logger.warn(&error);
        logger.error(&error);
        logger.fatal(&error);
        logger.panic(&error);
        logger.flush();
    }
}
