//! # Service Provider Protocol
//!
//! 하나의 서브시스템(설정, 라우팅, 데이터베이스 등)을 컨테이너에 연결하는 모듈의 계약입니다.
//!
//! ## 2단계 초기화
//!
//! ```text
//! Application::boot()
//!   ├─ Phase 1: 모든 프로바이더의 register()   ← bind/singleton만 호출
//!   └─ Phase 2: 모든 프로바이더의 boot()       ← make 자유롭게 호출
//! ```
//!
//! `register`가 실행되는 동안에는 뒤에 추가된 프로바이더가 아직 바인딩을 등록하지
//! 않았으므로 `make`를 호출하면 안 됩니다. 이 순서를 어기면 상태가 깨지는 대신
//! 평범한 `ServiceNotFound` 에러로 드러납니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use app_kernel::core::{Application, ServiceProvider};
//! use app_kernel::errors::AppResult;
//!
//! struct GreetingProvider;
//!
//! impl ServiceProvider for GreetingProvider {
//!     fn register(&self, app: &Application) -> AppResult<()> {
//!         app.singleton("greeting", |_| Ok("hello".to_string()));
//!         Ok(())
//!     }
//!
//!     fn boot(&self, app: &Application) -> AppResult<()> {
//!         let greeting = app.make::<String>("greeting")?;
//!         assert_eq!(greeting.as_str(), "hello");
//!         Ok(())
//!     }
//! }
//!
//! let app = Application::bare();
//! app.add_provider(GreetingProvider).unwrap();
//! app.boot().unwrap();
//! ```

use super::application::Application;
use crate::errors::AppResult;

/// 서브시스템을 애플리케이션에 연결하는 프로바이더
pub trait ServiceProvider: Send + Sync {
    /// 로그와 에러 메시지에 쓰이는 프로바이더 이름
    fn name(&self) -> &str {
        clean_type_name(std::any::type_name::<Self>())
    }

    /// 바인딩을 등록합니다. 이 단계에서는 `make`를 호출하지 않습니다.
    fn register(&self, app: &Application) -> AppResult<()>;

    /// 모든 프로바이더의 register가 끝난 뒤 호출됩니다.
    fn boot(&self, _app: &Application) -> AppResult<()> {
        Ok(())
    }
}

/// `app_kernel::providers::ConfigProvider` → `ConfigProvider`
///
/// 제네릭 인자는 버립니다 (`my_app::Cache<my_app::Redis>` → `Cache`).
fn clean_type_name(type_name: &'static str) -> &'static str {
    let base = match type_name.find('<') {
        Some(pos) => &type_name[..pos],
        None => type_name,
    };

    match base.rfind("::") {
        Some(pos) => &base[pos + 2..],
        None => base,
    }
}
