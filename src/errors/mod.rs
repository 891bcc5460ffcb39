//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 런타임, 프로바이더, HTTP 계층을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 컨테이너 에러([`ContainerError`])는 `?`로 자동 변환되며,
//! 부팅 중 실패한 프로바이더는 `Provider` 변형으로 감싸져 어느 단계에서
//! 어떤 프로바이더가 실패했는지 보존합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use app_kernel::errors::{AppError, AppResult};
//!
//! fn port(app: &Application) -> AppResult<u16> {
//!     let config = app.config()?;
//!     let port = config.get_int("APP_PORT");
//!     if port <= 0 {
//!         return Err(AppError::ValidationError("APP_PORT must be positive".to_string()));
//!     }
//!     Ok(port as u16)
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::core::errors::ContainerError;

/// 프로바이더 실행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Register,
    Boot,
}

impl fmt::Display for BootPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootPhase::Register => write!(f, "register"),
            BootPhase::Boot => write!(f, "boot"),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 서비스 컨테이너 해석 에러 (500 Internal Server Error)
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// 프로바이더 register/boot 실패 (500 Internal Server Error)
    #[error("Provider '{provider}' failed during {phase}: {source}")]
    Provider {
        provider: String,
        phase: BootPhase,
        #[source]
        source: Box<AppError>,
    },

    /// 설정 로딩/파싱 에러 (500 Internal Server Error)
    #[error("Config error: {0}")]
    ConfigError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프로바이더 실패로 감쌉니다.
    pub fn provider(provider: impl Into<String>, phase: BootPhase, source: AppError) -> Self {
        AppError::Provider {
            provider: provider.into(),
            phase,
            source: Box::new(source),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Body must be JSON".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("route".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_container_error_converts_and_maps_to_500() {
        fn resolve() -> AppResult<()> {
            let missing: Result<(), ContainerError> =
                Err(ContainerError::ServiceNotFound("app.router".to_string()));
            missing?;
            Ok(())
        }

        let error = resolve().unwrap_err();

        assert!(matches!(error, AppError::Container(ContainerError::ServiceNotFound(_))));
        assert_eq!(error.to_string(), "Service not found: app.router");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_provider_error_names_provider_and_phase() {
        let error = AppError::provider(
            "DatabaseProvider",
            BootPhase::Boot,
            AppError::DatabaseError("ping failed".to_string()),
        );

        let message = error.to_string();
        assert!(message.contains("DatabaseProvider"));
        assert!(message.contains("during boot"));
        assert!(message.contains("ping failed"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("root cause");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("root cause"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let result: Result<u8, String> = Ok(1);

        let value = result.with_context(|| panic!("must not be evaluated")).unwrap();

        assert_eq!(value, 1);
    }
}
