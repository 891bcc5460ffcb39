use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::config::{Config, EnvConfig, Environment};
use crate::core::{Application, ServiceProvider, bindings};
use crate::errors::AppResult;

/// `.env` 파일과 프로세스 환경 변수로 설정 저장소를 구성합니다.
///
/// 경로를 지정하지 않으면 `CONFIG_PATH` 환경 변수, 그것도 없으면 `.env`를 읽습니다.
/// 파일 로드는 register 단계에서 즉시 일어나므로 읽기 실패는 부팅 실패로 드러납니다.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    path: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn load(&self) -> AppResult<EnvConfig> {
        match &self.path {
            Some(path) => EnvConfig::load(path),
            None => EnvConfig::from_env(),
        }
    }
}

impl ServiceProvider for ConfigProvider {
    fn register(&self, app: &Application) -> AppResult<()> {
        let config: Arc<dyn Config> = Arc::new(self.load()?);
        app.instance(bindings::CONFIG, config);
        Ok(())
    }

    fn boot(&self, app: &Application) -> AppResult<()> {
        let config = app.config()?;
        info!(
            "Configuration loaded: {} values, environment {:?}",
            config.all().len(),
            Environment::from_config(config.as_ref())
        );
        Ok(())
    }
}
