//! HTTP 서버
//!
//! 부팅된 [`Application`]의 라우터를 actix-web 서버로 실행합니다.
//! 바인딩 주소, 워커 수, rate limiting, CORS 설정은 모두 설정 저장소에서 읽습니다.
//!
//! # 미들웨어 순서
//!
//! 1. Rate limiting (`actix-governor`, 가장 먼저 적용)
//! 2. CORS
//! 3. 요청 로깅
//! 4. 경로 정규화 (끝의 `/` 제거)

use std::io;
use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{App, HttpServer, middleware};
use log::info;

use crate::config::ServerSettings;
use crate::core::Application;
use crate::middlewares;

/// 부팅된 애플리케이션의 라우터를 HTTP로 제공합니다
///
/// # Errors
///
/// * 설정 또는 라우터를 컨테이너에서 꺼낼 수 없는 경우
/// * rate limit 설정이 유효하지 않은 경우
/// * 포트 바인딩 실패 또는 서버 실행 오류
pub async fn serve(app: &Application) -> io::Result<()> {
    let config = app.config().map_err(io::Error::other)?;
    let router = app.router().map_err(io::Error::other)?;
    let settings = ServerSettings::from_config(config.as_ref());
    let bind_address = settings.bind_address();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(settings.rate_limit_per_second)
        .burst_size(settings.rate_limit_burst)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "invalid rate limit settings")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        settings.rate_limit_per_second, settings.rate_limit_burst
    );
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let workers = settings.workers;

    HttpServer::new(move || {
        let router = Arc::clone(&router);

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(middlewares::cors(&settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| router.configure(cfg))
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}
