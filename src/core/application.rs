//! # Application
//!
//! 하나의 [`Container`]와 순서가 있는 프로바이더 목록, 그리고 한 번만 실행되는
//! 부팅 상태 머신을 소유하는 애플리케이션 객체입니다.
//!
//! ## 부팅 상태
//!
//! ```text
//! Unbooted ──boot()──▶ Registering ──▶ Booting ──▶ Booted (terminal)
//!     ▲                     │              │
//!     └──── provider error ─┴──────────────┘
//! ```
//!
//! - `boot()`는 멱등입니다. 두 번째 호출부터는 아무 일도 하지 않습니다.
//! - 모든 프로바이더의 `register`가 끝난 뒤에야 첫 `boot`가 실행됩니다.
//! - 내장 프로바이더(Config → Router → Database)가 항상 먼저 추가되므로
//!   사용자 프로바이더는 같은 식별자를 다시 바인딩하여 내장 구현을 덮어쓸 수 있습니다.
//! - register 단계 중 추가된 프로바이더는 두 단계 모두에 참여합니다.
//!   부팅이 끝난 뒤 추가된 프로바이더는 즉시 register + boot 됩니다.
//!
//! 전역 파사드는 없습니다. 컨테이너가 필요한 곳은 `&Application`이나
//! `&Container`를 명시적으로 전달받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,no_run
//! use app_kernel::core::Application;
//!
//! let app = Application::new();
//! app.boot().expect("boot failed");
//!
//! let config = app.config().unwrap();
//! println!("running in {}", config.get_with_default("APP_ENV", "production"));
//! ```

use std::any::Any;
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::{Mutex, ReentrantMutex, RwLock};

use super::binding::Service;
use super::bindings;
use super::container::Container;
use super::errors::{BoxError, ContainerResult};
use super::provider::ServiceProvider;
use crate::config::Config;
use crate::db::Database;
use crate::errors::{AppError, AppResult, BootPhase};
use crate::providers::{ConfigProvider, DatabaseProvider, RouterProvider};
use crate::routes::Router;

/// 부팅 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Unbooted,
    Registering,
    Booting,
    Booted,
}

pub struct Application {
    container: Container,
    providers: Mutex<Vec<Arc<dyn ServiceProvider>>>,
    state: RwLock<BootState>,
    /// boot()와 add_provider()를 직렬화합니다. 프로바이더 안에서의 재진입은 허용됩니다.
    boot_lock: ReentrantMutex<()>,
}

impl Application {
    /// 내장 프로바이더(Config, Router, Database)가 등록된 애플리케이션을 생성합니다.
    pub fn new() -> Self {
        let app = Self::bare();
        {
            let mut providers = app.providers.lock();
            providers.push(Arc::new(ConfigProvider::default()));
            providers.push(Arc::new(RouterProvider));
            providers.push(Arc::new(DatabaseProvider));
        }
        app
    }

    /// 내장 프로바이더 없이 빈 애플리케이션을 생성합니다.
    pub fn bare() -> Self {
        Self {
            container: Container::new(),
            providers: Mutex::new(Vec::new()),
            state: RwLock::new(BootState::Unbooted),
            boot_lock: ReentrantMutex::new(()),
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn state(&self) -> BootState {
        *self.state.read()
    }

    pub fn is_booted(&self) -> bool {
        self.state() == BootState::Booted
    }

    /// 등록 순서대로 프로바이더 이름을 반환합니다.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .lock()
            .iter()
            .map(|provider| provider.name().to_string())
            .collect()
    }

    /// 프로바이더를 추가합니다.
    ///
    /// 부팅 전이나 register 단계 중이면 목록 끝에 추가되어 부팅 흐름을 따릅니다.
    /// boot 단계 이후라면 즉시 register와 boot를 실행하고, 둘 다 성공한 경우에만 목록에 남습니다.
    ///
    /// # Errors
    ///
    /// 즉시 실행된 프로바이더의 register/boot 실패
    pub fn add_provider<P>(&self, provider: P) -> AppResult<()>
    where
        P: ServiceProvider + 'static,
    {
        let _guard = self.boot_lock.lock();
        let provider: Arc<dyn ServiceProvider> = Arc::new(provider);

        match self.state() {
            BootState::Unbooted | BootState::Registering => {
                self.providers.lock().push(provider);
                Ok(())
            }
            BootState::Booting | BootState::Booted => {
                debug!("Late provider {}: running register and boot now", provider.name());
                self.run_provider(provider.as_ref(), BootPhase::Register)?;
                self.run_provider(provider.as_ref(), BootPhase::Boot)?;
                self.providers.lock().push(provider);
                Ok(())
            }
        }
    }

    /// 모든 프로바이더의 register를 실행한 뒤 모든 프로바이더의 boot를 실행합니다.
    ///
    /// 이미 부팅되었거나 부팅 중이면 아무 일도 하지 않습니다.
    ///
    /// # Errors
    ///
    /// 프로바이더 하나라도 실패하면 즉시 중단하고 `AppError::Provider`를 반환합니다.
    /// 상태는 `Unbooted`로 돌아가며, 이미 등록된 바인딩은 남아 있습니다.
    pub fn boot(&self) -> AppResult<()> {
        let _guard = self.boot_lock.lock();
        if self.state() != BootState::Unbooted {
            return Ok(());
        }

        let result = self.run_phases();
        match &result {
            Ok(()) => {
                *self.state.write() = BootState::Booted;
                info!(
                    "Application booted: {} providers, {} bindings",
                    self.providers.lock().len(),
                    self.container.len()
                );
            }
            Err(error) => {
                *self.state.write() = BootState::Unbooted;
                warn!("Application boot aborted: {}", error);
            }
        }
        result
    }

    fn run_phases(&self) -> AppResult<()> {
        *self.state.write() = BootState::Registering;
        info!("Registering providers...");
        let mut index = 0;
        // providers may be appended while registering
        while let Some(provider) = self.provider_at(index) {
            self.run_provider(provider.as_ref(), BootPhase::Register)?;
            index += 1;
        }

        *self.state.write() = BootState::Booting;
        info!("Booting {} providers...", index);
        for position in 0..index {
            if let Some(provider) = self.provider_at(position) {
                self.run_provider(provider.as_ref(), BootPhase::Boot)?;
            }
        }

        Ok(())
    }

    fn provider_at(&self, index: usize) -> Option<Arc<dyn ServiceProvider>> {
        self.providers.lock().get(index).cloned()
    }

    fn run_provider(&self, provider: &dyn ServiceProvider, phase: BootPhase) -> AppResult<()> {
        debug!("{} {}", phase, provider.name());

        let result = match phase {
            BootPhase::Register => provider.register(self),
            BootPhase::Boot => provider.boot(self),
        };

        result.map_err(|error| AppError::provider(provider.name(), phase, error))
    }

    // ---- container delegation ----

    pub fn bind<T, F>(&self, id: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.container.bind(id, factory);
    }

    pub fn singleton<T, F>(&self, id: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.container.singleton(id, factory);
    }

    pub fn instance<T>(&self, id: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.container.instance(id, value);
    }

    pub fn make<T>(&self, id: &str) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.warn_on_failed_register_lookup(id, self.container.make(id))
    }

    pub fn make_any(&self, id: &str) -> ContainerResult<Service> {
        self.warn_on_failed_register_lookup(id, self.container.make_any(id))
    }

    fn warn_on_failed_register_lookup<V>(
        &self,
        id: &str,
        result: ContainerResult<V>,
    ) -> ContainerResult<V> {
        if let Err(error) = &result {
            if error.is_not_found() && self.state() == BootState::Registering {
                warn!(
                    "'{}' resolved during the register phase; providers added later have not registered yet",
                    id
                );
            }
        }
        result
    }

    // ---- well-known services ----

    /// 설정 서비스 (`bindings::CONFIG`)
    pub fn config(&self) -> AppResult<Arc<dyn Config>> {
        let config = self.make::<Arc<dyn Config>>(bindings::CONFIG)?;
        Ok(config.as_ref().clone())
    }

    /// 라우터 (`bindings::ROUTER`)
    pub fn router(&self) -> AppResult<Arc<Router>> {
        Ok(self.make::<Router>(bindings::ROUTER)?)
    }

    /// 데이터베이스 연결 래퍼 (`bindings::DATABASE`)
    pub fn database(&self) -> AppResult<Arc<Database>> {
        Ok(self.make::<Database>(bindings::DATABASE)?)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
