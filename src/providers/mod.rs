//! 내장 서비스 프로바이더
//!
//! `Application::new()`가 아래 순서로 자동 추가합니다.
//!
//! | 프로바이더 | 식별자 | 서비스 |
//! |---|---|---|
//! | [`ConfigProvider`] | `app.config` | `Arc<dyn Config>` |
//! | [`RouterProvider`] | `app.router` | `Router` + `GET /health` |
//! | [`DatabaseProvider`] | `app.database` | `Database` (지연 연결) |
//!
//! 사용자 프로바이더는 이들 뒤에 추가되므로 같은 식별자로 다시 바인딩하면
//! 내장 구현을 대체할 수 있습니다.

mod config;
mod database;
mod router;

pub use config::ConfigProvider;
pub use database::DatabaseProvider;
pub use router::RouterProvider;
