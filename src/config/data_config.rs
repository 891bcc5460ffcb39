//! 실행 환경 및 서버 설정 관리 모듈
//!
//! [`Config`] 저장소에서 실행 환경과 HTTP 서버 바인딩 설정을 읽습니다.

use super::Config;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 설정의 `APP_ENV` 값으로 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::from_config(config.as_ref());
    /// match env {
    ///     Environment::Development => println!("개발 환경"),
    ///     Environment::Production => println!("프로덕션 환경"),
    ///     _ => {}
    /// }
    /// ```
    pub fn from_config(config: &dyn Config) -> Self {
        Self::from_name(&config.get_with_default("APP_ENV", "production"))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `name` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// 바인딩할 호스트. 기본값: "127.0.0.1"
    pub host: String,
    /// 바인딩할 포트. 기본값: 8080
    pub port: u16,
    /// 워커 스레드 수. 기본값: 4
    pub workers: usize,
    /// 초당 허용 요청 수. 기본값: 100
    pub rate_limit_per_second: u64,
    /// 버스트 허용량. 기본값: 200
    pub rate_limit_burst: u32,
    /// CORS 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub allowed_origins: Vec<String>,
}

impl ServerSettings {
    /// 설정 저장소에서 서버 설정을 읽습니다.
    ///
    /// # Config Keys
    ///
    /// - `APP_HOST`, `APP_PORT`, `APP_WORKERS`
    /// - `RATE_LIMIT_PER_SECOND`, `RATE_LIMIT_BURST_SIZE`
    /// - `CORS_ALLOWED_ORIGINS`
    ///
    /// 범위를 벗어나거나 파싱할 수 없는 값은 기본값으로 대체됩니다.
    pub fn from_config(config: &dyn Config) -> Self {
        Self {
            host: config.get_with_default("APP_HOST", "127.0.0.1"),
            port: positive(config.get_int("APP_PORT"), 8080),
            workers: positive(config.get_int("APP_WORKERS"), 4),
            rate_limit_per_second: positive(config.get_int("RATE_LIMIT_PER_SECOND"), 100),
            rate_limit_burst: positive(config.get_int("RATE_LIMIT_BURST_SIZE"), 200),
            allowed_origins: config
                .get("CORS_ALLOWED_ORIGINS")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn positive<T: TryFrom<i64>>(value: i64, default: T) -> T {
    if value <= 0 {
        return default;
    }
    T::try_from(value).unwrap_or(default)
}
