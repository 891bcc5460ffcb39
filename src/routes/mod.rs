//! 라우터 모듈
//!
//! 메서드별 라우트 테이블을 관리하고 actix-web 서비스 설정으로 변환합니다.
//! 내장 `RouterProvider`가 `bindings::ROUTER` 식별자로 [`Router`]를 컨테이너에 등록하며,
//! 다른 프로바이더는 `boot` 단계에서 이 라우터에 자신의 엔드포인트를 추가합니다.
//!
//! # Features
//!
//! - GET/POST/PUT/DELETE/PATCH 라우트 등록
//! - 접두사 그룹 (`group`)과 그룹별 미들웨어
//! - 경로 파라미터(`/users/{id}`), 쿼리, 헤더, JSON 본문 접근 ([`RequestContext`])
//! - 헬스체크 엔드포인트 ([`health_check`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::http::StatusCode;
//! use app_kernel::middlewares::require_header;
//!
//! let router = app.router()?;
//!
//! router.group("/api/v1", |api| {
//!     api.use_middleware(require_header("Authorization"));
//!     api.get("/users/{id}", |ctx| {
//!         let id = ctx.param("id").unwrap_or_default().to_string();
//!         ctx.json(StatusCode::OK, &serde_json::json!({ "id": id }))
//!     });
//! });
//! ```
//!
//! ## 미들웨어 적용 범위
//!
//! - `use_middleware`로 추가한 미들웨어는 해당 라우터의 모든 라우트에 적용됩니다.
//!   추가 시점보다 먼저 등록된 라우트도 포함됩니다.
//! - 그룹은 생성 시점의 부모 미들웨어를 복사해 시작하며,
//!   그룹 안에서 추가한 미들웨어는 부모에 영향을 주지 않습니다.

use std::sync::Arc;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use log::debug;
use parking_lot::RwLock;
use serde_json::json;

use crate::middlewares::Middleware;

mod context;

pub use context::RequestContext;

/// 라우트 핸들러
pub type Handler = Arc<dyn Fn(&RequestContext) -> HttpResponse + Send + Sync>;

type MiddlewareChain = Arc<RwLock<Vec<Middleware>>>;

/// 등록된 라우트 한 건
#[derive(Clone)]
pub struct Route {
    method: Method,
    path: String,
    handler: Handler,
    middleware: MiddlewareChain,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// 그룹 접두사가 포함된 전체 경로
    pub fn path(&self) -> &str {
        &self.path
    }

}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

/// 메서드 기반 라우트 테이블
///
/// 그룹으로 만든 하위 라우터는 라우트 저장소를 부모와 공유합니다.
pub struct Router {
    prefix: String,
    routes: Arc<RwLock<Vec<Route>>>,
    middleware: MiddlewareChain,
}

impl Router {
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            routes: Arc::new(RwLock::new(Vec::new())),
            middleware: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn get<F>(&self, path: &str, handler: F)
    where
        F: Fn(&RequestContext) -> HttpResponse + Send + Sync + 'static,
    {
        self.route(Method::GET, path, handler);
    }

    pub fn post<F>(&self, path: &str, handler: F)
    where
        F: Fn(&RequestContext) -> HttpResponse + Send + Sync + 'static,
    {
        self.route(Method::POST, path, handler);
    }

    pub fn put<F>(&self, path: &str, handler: F)
    where
        F: Fn(&RequestContext) -> HttpResponse + Send + Sync + 'static,
    {
        self.route(Method::PUT, path, handler);
    }

    pub fn delete<F>(&self, path: &str, handler: F)
    where
        F: Fn(&RequestContext) -> HttpResponse + Send + Sync + 'static,
    {
        self.route(Method::DELETE, path, handler);
    }

    pub fn patch<F>(&self, path: &str, handler: F)
    where
        F: Fn(&RequestContext) -> HttpResponse + Send + Sync + 'static,
    {
        self.route(Method::PATCH, path, handler);
    }

    /// 라우트를 등록합니다.
    ///
    /// 같은 메서드와 전체 경로로 이미 등록된 라우트가 있으면 교체합니다.
    pub fn route<F>(&self, method: Method, path: &str, handler: F)
    where
        F: Fn(&RequestContext) -> HttpResponse + Send + Sync + 'static,
    {
        let route = Route {
            method,
            path: join_path(&self.prefix, path),
            handler: Arc::new(handler),
            middleware: Arc::clone(&self.middleware),
        };

        debug!("Route registered: {} {}", route.method, route.path);

        let mut routes = self.routes.write();
        match routes
            .iter_mut()
            .find(|existing| existing.method == route.method && existing.path == route.path)
        {
            Some(existing) => *existing = route,
            None => routes.push(route),
        }
    }

    /// 접두사 그룹을 만듭니다.
    ///
    /// # Arguments
    ///
    /// * `prefix` - 현재 접두사 뒤에 붙는 경로 (`"/api"` → `"/api/users"`)
    /// * `f` - 그룹 라우터에 라우트와 미들웨어를 등록하는 클로저
    pub fn group<F>(&self, prefix: &str, f: F)
    where
        F: FnOnce(&Router),
    {
        let inherited = self.middleware.read().clone();
        let group = Router {
            prefix: join_path(&self.prefix, prefix),
            routes: Arc::clone(&self.routes),
            middleware: Arc::new(RwLock::new(inherited)),
        };

        f(&group);
    }

    /// 이 라우터의 모든 라우트에 미들웨어를 추가합니다.
    pub fn use_middleware(&self, middleware: Middleware) {
        self.middleware.write().push(middleware);
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 등록된 라우트의 스냅샷 (그룹 라우트 포함)
    pub fn routes(&self) -> Vec<Route> {
        self.routes.read().clone()
    }

    pub fn has_route(&self, method: &Method, path: &str) -> bool {
        self.routes
            .read()
            .iter()
            .any(|route| route.method == *method && route.path == path)
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    /// 등록된 라우트를 actix-web 서비스 설정에 추가합니다
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let router = app.router()?;
    /// HttpServer::new(move || {
    ///     let router = Arc::clone(&router);
    ///     App::new().configure(move |cfg| router.configure(cfg))
    /// })
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        for route in self.routes() {
            let Route {
                method,
                path,
                handler,
                middleware,
            } = route;

            cfg.route(
                &path,
                web::method(method).to(move |req: HttpRequest, body: web::Bytes| {
                    let handler = Arc::clone(&handler);
                    let middleware = Arc::clone(&middleware);
                    async move {
                        let ctx = RequestContext::new(req, body);
                        dispatch(&middleware, &handler, &ctx)
                    }
                }),
            );
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn dispatch(
    middleware: &RwLock<Vec<Middleware>>,
    handler: &Handler,
    ctx: &RequestContext,
) -> HttpResponse {
    // 미들웨어가 라우터를 수정할 수 있으므로 잠금을 풀고 실행
    let chain = middleware.read().clone();

    for middleware in &chain {
        if let Some(response) = middleware(ctx) {
            return response;
        }
    }

    handler(ctx)
}

fn join_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    match (prefix.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => prefix.to_string(),
        (true, false) => format!("/{}", path),
        (false, false) => format!("{}/{}", prefix, path),
    }
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "app_kernel",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
pub fn health_check(_ctx: &RequestContext) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
