use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::core::{Application, ServiceProvider, bindings};
use crate::db::Database;
use crate::errors::AppResult;

/// 설정의 `DB_*` 키로 [`Database`]를 등록합니다. 연결은 첫 사용 시점까지 미룹니다.
#[derive(Debug, Default)]
pub struct DatabaseProvider;

impl ServiceProvider for DatabaseProvider {
    fn register(&self, app: &Application) -> AppResult<()> {
        app.singleton(bindings::DATABASE, |container| {
            let config = container.make::<Arc<dyn Config>>(bindings::CONFIG)?;
            Ok(Database::from_config(config.as_ref().as_ref()))
        });
        Ok(())
    }

    fn boot(&self, app: &Application) -> AppResult<()> {
        let database = app.database()?;
        info!(
            "Database configured: {}",
            database.settings().display_address()
        );
        Ok(())
    }
}
