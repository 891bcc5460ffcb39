//! # Container Error Types
//!
//! 서비스 컨테이너가 바인딩 해석(resolution) 과정에서 반환하는 에러 타입입니다.
//! 컨테이너는 에러를 삼키거나 로깅하지 않으며, 모든 실패를 호출자에게 그대로 돌려줍니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 시점 | 복구 |
//! |------|-----------|------|
//! | `ServiceNotFound` | 바인딩되지 않은 식별자 `make` | 호출자가 결정 |
//! | `Factory` | 팩토리 자체가 실패 | 캐시되지 않음, 다음 호출에서 재시도 |
//! | `TypeMismatch` | 다운캐스트 타입 불일치 | 호출 지점의 타입 수정 |
//!
//! Register 단계에서 아직 등록되지 않은 식별자를 `make`하는 순서 위반도
//! 별도 변형 없이 `ServiceNotFound`로 나타납니다. 컨테이너는 "앞으로도 없음"과
//! "아직 없음"을 구분할 수 없기 때문입니다.

use thiserror::Error;

/// 팩토리가 반환할 수 있는 박싱된 에러 타입
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 컨테이너 해석 에러
#[derive(Error, Debug)]
pub enum ContainerError {
    /// 식별자에 대한 바인딩이 없음
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// 팩토리 실행 실패
    #[error("Factory for '{id}' failed: {source}")]
    Factory {
        id: String,
        #[source]
        source: BoxError,
    },

    /// 해석된 값이 요청한 타입과 다름
    #[error("Type mismatch for '{id}': expected {expected}, bound as {actual}")]
    TypeMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ContainerError {
    /// 에러가 가리키는 식별자를 반환합니다.
    pub fn identifier(&self) -> &str {
        match self {
            ContainerError::ServiceNotFound(id) => id,
            ContainerError::Factory { id, .. } => id,
            ContainerError::TypeMismatch { id, .. } => id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContainerError::ServiceNotFound(_))
    }
}

/// 컨테이너 연산의 Result 타입 별칭
pub type ContainerResult<T> = Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_identifier() {
        let error = ContainerError::ServiceNotFound("missing".to_string());

        assert!(error.is_not_found());
        assert_eq!(error.identifier(), "missing");
        assert_eq!(error.to_string(), "Service not found: missing");
    }

    #[test]
    fn test_factory_error_keeps_source() {
        let source: BoxError = "connection refused".into();
        let error = ContainerError::Factory {
            id: "app.database".to_string(),
            source,
        };

        assert!(!error.is_not_found());
        assert!(error.to_string().contains("connection refused"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
