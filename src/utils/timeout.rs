//! 외부 호출 타임아웃
//!
//! MongoDB 연결/쿼리처럼 응답 시간이 보장되지 않는 비동기 작업을
//! 설정된 시간(`CONTEXT_TIMEOUT_SECONDS`) 안에 끝내도록 감쌉니다.
//!
//! ```rust,ignore
//! let user = with_timeout(timeout, "repositories.users.get_user_by_id", async {
//!     collection.find_one(doc! { "_id": id }).await.map_err(|e| DomainError::internal(LOCATION, e))
//! })
//! .await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::errors::domain::{DomainError, InternalError};

/// 작업이 `duration` 안에 끝나지 않으면 `InternalError`를 반환합니다.
pub async fn with_timeout<T, F>(duration: Duration, location: &str, future: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(InternalError::new(
            location,
            format!("operation timed out after {}ms", duration.as_millis()),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completed_future_passes_through() {
        let value = with_timeout(Duration::from_secs(1), "tests.fast", async { Ok::<_, DomainError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_slow_future_becomes_internal_error() {
        let result = with_timeout(Duration::from_millis(10), "tests.slow", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, DomainError>(())
        })
        .await;

        match result {
            Err(DomainError::Internal(error)) => {
                assert_eq!(error.base.location, "tests.slow");
                assert!(error.base.notification.contains("timed out"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_inner_error_is_kept() {
        let result: Result<(), DomainError> = with_timeout(Duration::from_secs(1), "tests.err", async {
            Err(DomainError::info("tests.err", "inner"))
        })
        .await;

        assert!(matches!(result, Err(DomainError::Info(_))));
    }
}
