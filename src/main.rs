//! app_kernel 실행 바이너리
//!
//! 내장 프로바이더로 애플리케이션을 부팅하고 HTTP 서버를 실행합니다.
//! 부팅이 실패하면 서버를 시작하지 않고 종료합니다.

use std::io;

use app_kernel::config::Environment;
use app_kernel::core::Application;
use app_kernel::server;
use app_kernel::utils::display_terminal::{print_boot_summary, print_boxed_title};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging();

    info!("🚀 app_kernel 시작중...");

    let app = Application::new();
    if let Err(e) = app.boot() {
        error!("❌ 애플리케이션 부팅 실패: {}", e);
        return Err(io::Error::other(e));
    }

    print_boxed_title(concat!("app_kernel v", env!("CARGO_PKG_VERSION")));
    print_boot_summary(&app);

    if let Ok(config) = app.config() {
        info!("Current environment: {:?}", Environment::from_config(config.as_ref()));
    }

    server::serve(&app).await
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 컨테이너/부팅 과정까지 보기
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=app_kernel::core=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
