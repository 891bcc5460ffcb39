//! 미들웨어 모듈
//!
//! 라우터 수준 미들웨어와 HTTP 서버에 씌우는 CORS 설정을 제공합니다.
//!
//! # 라우터 미들웨어
//!
//! [`Middleware`]는 핸들러보다 먼저 등록 순서대로 실행됩니다.
//! `None`을 반환하면 다음 단계로 진행하고, `Some(response)`를 반환하면
//! 요청을 그 자리에서 종료하고 해당 응답을 돌려줍니다.
//!
//! ```rust,ignore
//! use app_kernel::middlewares::require_header;
//!
//! router.group("/admin", |admin| {
//!     admin.use_middleware(require_header("X-Admin-Token"));
//!     admin.get("/stats", stats_handler);
//! });
//! ```
//!
//! # 서버 미들웨어
//!
//! [`cors`]는 [`ServerSettings`]의 허용 Origin 목록으로 `actix_cors::Cors`를 구성합니다.
//! Rate limiting, 로깅, 경로 정규화는 `server` 모듈에서 함께 적용됩니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::HttpResponse;
use actix_web::http::header;
use serde_json::json;

use crate::config::ServerSettings;
use crate::routes::RequestContext;

/// 라우터 미들웨어. `Some`을 반환하면 요청을 중단합니다.
pub type Middleware = Arc<dyn Fn(&RequestContext) -> Option<HttpResponse> + Send + Sync>;

/// 허용 Origin이 설정되지 않았을 때 사용하는 로컬 개발용 Origin
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

/// 클로저를 [`Middleware`]로 감쌉니다.
pub fn middleware<F>(f: F) -> Middleware
where
    F: Fn(&RequestContext) -> Option<HttpResponse> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 지정한 헤더가 없거나 비어 있으면 `401 Unauthorized`로 응답합니다.
pub fn require_header(name: &str) -> Middleware {
    let name = name.to_string();
    middleware(move |ctx| match ctx.header(&name) {
        Some(value) if !value.trim().is_empty() => None,
        _ => Some(HttpResponse::Unauthorized().json(json!({
            "error": format!("Missing required header: {}", name)
        }))),
    })
}

/// CORS 미들웨어를 구성합니다
///
/// # Allowed Origins
///
/// * `CORS_ALLOWED_ORIGINS`에 지정한 Origin 목록
/// * 비어 있으면 `localhost`/`127.0.0.1`의 3000, 8080 포트
pub fn cors(settings: &ServerSettings) -> Cors {
    let mut cors = Cors::default();

    if settings.allowed_origins.is_empty() {
        for origin in DEV_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
    } else {
        for origin in &settings.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
