//! # Configuration Module
//!
//! 애플리케이션 설정 관리를 담당하는 모듈입니다.
//! `.env` 파일에서 읽은 값과 프로세스 환경 변수를 하나의 [`Config`] 인터페이스로 제공하며,
//! 내장 `ConfigProvider`가 `bindings::CONFIG` 식별자로 컨테이너에 등록합니다.
//!
//! ## 모듈 구성
//!
//! - [`env_config`] - `.env` 파일 + 환경 변수 기반 [`Config`] 구현
//! - [`data_config`] - 실행 환경, 서버 바인딩 설정
//!
//! ## 값 조회 우선순위
//!
//! 1. 비어 있지 않은 프로세스 환경 변수
//! 2. `.env` 파일 또는 `set()`으로 지정한 값
//! 3. 호출자가 넘긴 기본값 (`get_with_default`)
//!
//! ## 사용 예제
//!
//! ```rust
//! use app_kernel::config::{Config, EnvConfig};
//!
//! let config = EnvConfig::from_pairs([("APP_PORT", "9000"), ("APP_DEBUG", "yes")]);
//!
//! assert_eq!(config.get_int("APP_PORT"), 9000);
//! assert!(config.get_bool("APP_DEBUG"));
//! assert_eq!(config.get_with_default("APP_KERNEL_UNSET_KEY", "fallback"), "fallback");
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 설정 파일 위치 (기본값: .env)
//! export CONFIG_PATH=".env.prod"
//!
//! # 실행 환경
//! export APP_ENV="production"   # development, test, staging, production
//!
//! # 서버 설정
//! export APP_HOST="0.0.0.0"
//! export APP_PORT="8080"
//! ```

use std::collections::HashMap;

pub mod data_config;
pub mod env_config;

pub use data_config::*;
pub use env_config::*;

/// 키-값 설정 저장소
pub trait Config: Send + Sync {
    /// 값을 조회합니다. 값이 없거나 비어 있으면 `None`.
    fn lookup(&self, key: &str) -> Option<String>;

    /// 값을 설정합니다. 같은 이름의 환경 변수가 있으면 조회 시 환경 변수가 우선합니다.
    fn set(&self, key: &str, value: &str);

    /// 파일/`set()`으로 저장된 모든 값의 복사본
    fn all(&self) -> HashMap<String, String>;

    /// 값을 조회합니다. 없으면 빈 문자열.
    fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    fn get_with_default(&self, key: &str, default_value: &str) -> String {
        self.lookup(key)
            .unwrap_or_else(|| default_value.to_string())
    }

    /// 정수로 파싱합니다. 없거나 파싱에 실패하면 0.
    fn get_int(&self, key: &str) -> i64 {
        self.lookup(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// `true`, `1`, `yes` (대소문자 무관)만 참으로 취급합니다.
    fn get_bool(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(|value| {
            matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
        })
    }
}
