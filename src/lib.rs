//! app_kernel
//!
//! 서버 애플리케이션을 위한 최소 런타임입니다.
//! 의존성 주입 컨테이너, 2단계 프로바이더 부팅, 그리고 그 위에서 동작하는
//! 설정/라우터/데이터베이스 서브시스템을 제공합니다.
//!
//! # Features
//!
//! - **서비스 컨테이너**: 식별자 기반 지연 생성, 싱글톤 한 번 생성 보장, thread-safe
//! - **프로바이더 부팅**: 모든 register 후 모든 boot, 한 번만 실행
//! - **설정**: `.env` 파일 + 환경 변수 우선
//! - **라우터**: 메서드별 라우트, 접두사 그룹, 미들웨어, actix-web 서버
//! - **MongoDB**: 설정 기반 지연 연결
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Application   │ ← 프로바이더 목록 + 부팅 상태
//! └─────────────────┘
//!          │ register → boot
//!          ▼
//! ┌─────────────────┐
//! │    Providers    │ ← Config, Router, Database, 사용자 프로바이더
//! └─────────────────┘
//!          │ bind / singleton / make
//!          ▼
//! ┌─────────────────┐
//! │    Container    │ ← 바인딩 레지스트리 + 인스턴스 캐시
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use actix_web::http::StatusCode;
//! use app_kernel::core::{Application, ServiceProvider};
//! use app_kernel::errors::AppResult;
//!
//! struct HelloProvider;
//!
//! impl ServiceProvider for HelloProvider {
//!     fn register(&self, app: &Application) -> AppResult<()> {
//!         app.singleton("hello.message", |_| Ok("hello".to_string()));
//!         Ok(())
//!     }
//!
//!     fn boot(&self, app: &Application) -> AppResult<()> {
//!         let message = app.make::<String>("hello.message")?;
//!         app.router()?.get("/hello", move |ctx| ctx.text(StatusCode::OK, message.as_str()));
//!         Ok(())
//!     }
//! }
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = Application::new();
//!     app.add_provider(HelloProvider).map_err(std::io::Error::other)?;
//!     app.boot().map_err(std::io::Error::other)?;
//!     app_kernel::server::serve(&app).await
//! }
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod errors;
pub mod middlewares;
pub mod providers;
pub mod routes;
pub mod server;
pub mod utils;
