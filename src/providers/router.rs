use log::debug;

use crate::core::{Application, ServiceProvider, bindings};
use crate::errors::AppResult;
use crate::routes::{Router, health_check};

/// 빈 [`Router`]를 등록하고 boot 단계에서 `GET /health`를 추가합니다.
#[derive(Debug, Default)]
pub struct RouterProvider;

impl ServiceProvider for RouterProvider {
    fn register(&self, app: &Application) -> AppResult<()> {
        app.singleton(bindings::ROUTER, |_| Ok(Router::new()));
        Ok(())
    }

    fn boot(&self, app: &Application) -> AppResult<()> {
        let router = app.router()?;
        router.get("/health", health_check);
        debug!("Router ready with {} routes", router.len());
        Ok(())
    }
}
