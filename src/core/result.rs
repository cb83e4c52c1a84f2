//! 도메인 연산 결과 컨테이너
//!
//! 모든 리포지토리/유스케이스 연산은 예외 대신 [`DomainResult`]를 반환합니다.
//! 성공이면 `data`만, 실패면 `error`와 타입의 기본값(zero value)을 가집니다.
//!
//! ```rust,ignore
//! let result = user_repository.get_user_by_id(&user_id).await;
//! if let Some(error) = result.error() {
//!     return DomainResult::on_failure(error.clone());
//! }
//! let user = result.into_data();
//! ```
//!
//! 같은 흐름을 [`propagate!`](crate::propagate)로 줄여 쓸 수 있습니다.

use crate::errors::domain::DomainError;

/// 성공 또는 실패를 담는 불변 결과 타입
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResult<T> {
    data: T,
    error: Option<DomainError>,
}

impl<T> DomainResult<T> {
    pub fn on_success(data: T) -> Self {
        Self { data, error: None }
    }

    /// 실패 결과를 만듭니다. `data`는 `T::default()`로 채워집니다.
    pub fn on_failure(error: DomainError) -> Self
    where
        T: Default,
    {
        Self {
            data: T::default(),
            error: Some(error),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// 외부 크레이트나 검증 결과를 실패 지점에서 감쌉니다.
    pub fn from_result(result: Result<T, DomainError>) -> Self
    where
        T: Default,
    {
        match result {
            Ok(data) => DomainResult::on_success(data),
            Err(error) => DomainResult::on_failure(error),
        }
    }

    pub fn into_parts(self) -> (T, Option<DomainError>) {
        (self.data, self.error)
    }

    /// 전송 계층 경계에서 `?` 연산자와 함께 쓰기 위해 표준 `Result`로 변환합니다.
    pub fn into_result(self) -> Result<T, DomainError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

impl<T: Default> From<Result<T, DomainError>> for DomainResult<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        DomainResult::from_result(result)
    }
}

/// 실패한 [`DomainResult`]면 그 에러로 감싼 실패 결과를 즉시 반환하고,
/// 성공이면 데이터를 꺼냅니다. 반환 타입은 `DomainResult<U>` (`U: Default`)여야 합니다.
#[macro_export]
macro_rules! propagate {
    ($result:expr) => {{
        let result: $crate::core::result::DomainResult<_> = $result;
        match result.into_parts() {
            (data, None) => data,
            (_, Some(error)) => return $crate::core::result::DomainResult::on_failure(error),
        }
    }};
}
