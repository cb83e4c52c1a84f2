//! 로거 기능 구현
//!
//! - [`console`] - `log` 파사드로 한 줄 JSON을 내보내는 "EnvLogger" 전략

pub mod console;

pub use console::ConsoleLogger;
