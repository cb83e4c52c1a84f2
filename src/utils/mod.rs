//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 생명주기 진행 상황 터미널 출력
//! - [`sync_set`] - 잠금으로 보호되는 집합 / 삽입 순서 유지 집합
//! - [`timeout`] - 외부 호출에 컨텍스트 타임아웃 적용
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::sync_set::OrderedSet;
//! use crate::utils::timeout::with_timeout;
//!
//! let origins = OrderedSet::default();
//! origins.add("http://localhost:3000".to_string());
//!
//! let count = with_timeout(timeout, "repositories.users.count", async { Ok(1) }).await?;
//! ```

pub mod display_terminal;
pub mod sync_set;
pub mod timeout;
