//! 잘 알려진 바인딩 식별자
//!
//! 내장 프로바이더와 소비자가 관례로 합의하는 문자열 상수입니다.
//! 사용자 프로바이더는 같은 식별자로 다시 바인딩하여 내장 구현을 대체할 수 있습니다.

/// `Arc<dyn Config>` 바인딩
pub const CONFIG: &str = "app.config";

/// `Router` 바인딩
pub const ROUTER: &str = "app.router";

/// `Database` 바인딩
pub const DATABASE: &str = "app.database";
