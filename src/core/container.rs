//! # Service Container
//!
//! 바인딩 레지스트리와 인스턴스 캐시를 하나의 잠금 영역으로 묶은 서비스 컨테이너입니다.
//! 여러 스레드가 동시에 `make`를 호출할 수 있으며, 팩토리는 같은 컨테이너를
//! 다시 호출해도 교착 상태에 빠지지 않습니다.
//!
//! ## 해석 프로토콜
//!
//! ```text
//! make(id)
//!   ├─ [read lock]  싱글톤 + 캐시 존재 → 즉시 반환
//!   ├─ [read lock]  팩토리 핸들 복사 (없으면 ServiceNotFound)
//!   ├─ [no lock]    팩토리 실행 (컨테이너 재진입 허용)
//!   └─ [write lock] 싱글톤이면 재확인
//!         ├─ 다른 호출자가 먼저 설치함 → 방금 만든 값 버리고 승자 반환
//!         └─ 아니면 설치 후 반환
//! ```
//!
//! 팩토리가 부수 효과를 가진다면 경쟁 상황에서 여분의 인스턴스가 잠깐 만들어질 수
//! 있지만, 관찰 가능한 인스턴스는 항상 하나입니다. 순환 팩토리(A → B → A)는
//! 감지하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use std::sync::Arc;
//! use app_kernel::core::Container;
//!
//! let container = Container::new();
//! container.singleton("greeting", |_| Ok("hello".to_string()));
//! container.bind("shout", |c| {
//!     let greeting = c.make::<String>("greeting")?;
//!     Ok(greeting.to_uppercase())
//! });
//!
//! let shout: Arc<String> = container.make("shout").unwrap();
//! assert_eq!(shout.as_str(), "HELLO");
//! ```

use std::any::{Any, type_name};
use std::sync::Arc;

use parking_lot::RwLock;

use super::binding::{BindingRegistry, Factory, Service};
use super::errors::{BoxError, ContainerError, ContainerResult};
use super::instances::InstanceCache;

#[derive(Default)]
struct ContainerState {
    bindings: BindingRegistry,
    instances: InstanceCache,
}

/// 스레드 안전한 서비스 컨테이너
///
/// 복제 비용이 낮으며, 복제본은 같은 바인딩과 캐시를 공유합니다.
#[derive(Clone, Default)]
pub struct Container {
    state: Arc<RwLock<ContainerState>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// 비싱글톤 바인딩을 등록합니다. `make`할 때마다 팩토리가 호출됩니다.
    ///
    /// 기존 바인딩을 덮어쓰고, 캐시된 인스턴스가 있으면 버립니다.
    pub fn bind<T, F>(&self, id: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register(id.into(), erase(factory), false, type_name::<T>());
    }

    /// 싱글톤 바인딩을 등록합니다. 첫 해석 결과가 캐시됩니다.
    pub fn singleton<T, F>(&self, id: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register(id.into(), erase(factory), true, type_name::<T>());
    }

    /// 이미 만들어진 값을 등록합니다. 모든 해석이 같은 값을 반환합니다.
    pub fn instance<T>(&self, id: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.register(
            id.into(),
            Factory::Prebuilt(Arc::new(value)),
            true,
            type_name::<T>(),
        );
    }

    fn register(&self, id: String, factory: Factory, singleton: bool, type_name: &'static str) {
        let mut state = self.state.write();
        state.instances.evict(&id);
        state.bindings.insert(id, factory, singleton, type_name);
    }

    /// 식별자를 해석하여 타입이 지워진 값을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ServiceNotFound` - 바인딩 없음
    /// * `Factory` - 팩토리 실패 (캐시되지 않으므로 다음 호출에서 재시도)
    pub fn make_any(&self, id: &str) -> ContainerResult<Service> {
        let (factory, singleton, generation) = {
            let state = self.state.read();
            let binding = state
                .bindings
                .get(id)
                .ok_or_else(|| ContainerError::ServiceNotFound(id.to_string()))?;

            if binding.singleton {
                if let Some(instance) = state.instances.get(id) {
                    return Ok(instance);
                }
            }

            (binding.factory.clone(), binding.singleton, binding.generation)
        };

        let built = factory
            .produce(self)
            .map_err(|source| ContainerError::Factory {
                id: id.to_string(),
                source,
            })?;

        if !singleton {
            return Ok(built);
        }

        let mut state = self.state.write();
        if let Some(winner) = state.instances.get(id) {
            return Ok(winner);
        }
        // rebound while constructing: the value came from a stale factory
        if state.bindings.generation_of(id) != Some(generation) {
            return Ok(built);
        }

        Ok(state.instances.install(id, built))
    }

    /// 식별자를 해석하고 `T`로 다운캐스트합니다.
    ///
    /// # Errors
    ///
    /// `make_any`의 에러에 더해, 값의 타입이 `T`가 아니면 `TypeMismatch`.
    pub fn make<T>(&self, id: &str) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.make_any(id)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                id: id.to_string(),
                expected: type_name::<T>(),
                actual: self.bound_type_name(id).unwrap_or("unknown"),
            })
    }

    pub fn has(&self, id: &str) -> bool {
        self.state.read().bindings.contains(id)
    }

    pub fn is_singleton(&self, id: &str) -> bool {
        self.state
            .read()
            .bindings
            .get(id)
            .is_some_and(|binding| binding.is_singleton())
    }

    /// 싱글톤 인스턴스가 이미 캐시되어 있는지 확인합니다.
    pub fn is_resolved(&self, id: &str) -> bool {
        self.state.read().instances.contains(id)
    }

    /// 바인딩은 유지한 채 캐시된 인스턴스만 버립니다.
    pub fn forget_instance(&self, id: &str) -> bool {
        self.state.write().instances.evict(id).is_some()
    }

    pub fn bound_type_name(&self, id: &str) -> Option<&'static str> {
        self.state.read().bindings.get(id).map(|binding| binding.type_name())
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.state.read().bindings.identifiers()
    }

    pub fn len(&self) -> usize {
        self.state.read().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().bindings.is_empty()
    }
}

fn erase<T, F>(factory: F) -> Factory
where
    T: Any + Send + Sync,
    F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
{
    Factory::Callable(Arc::new(move |container: &Container| {
        factory(container).map(|value| Arc::new(value) as Service)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::mpsc;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn counter_factory(
        counter: Arc<AtomicUsize>,
    ) -> impl Fn(&Container) -> Result<usize, BoxError> + Send + Sync + 'static {
        move |_: &Container| Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[test]
    fn test_singleton_memoizes_first_value() {
        let container = Container::new();
        let counter = Arc::new(AtomicUsize::new(0));
        container.singleton("greeting", counter_factory(counter.clone()));

        let first = container.make::<usize>("greeting").unwrap();
        let second = container.make::<usize>("greeting").unwrap();

        assert_eq!(*first, 1);
        assert_eq!(*second, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(container.is_resolved("greeting"));
    }

    #[test]
    fn test_bind_invokes_factory_every_time() {
        let container = Container::new();
        let counter = Arc::new(AtomicUsize::new(0));
        container.bind("echo", counter_factory(counter.clone()));

        assert_eq!(*container.make::<usize>("echo").unwrap(), 1);
        assert_eq!(*container.make::<usize>("echo").unwrap(), 2);
        assert!(!container.is_resolved("echo"));
    }

    #[test]
    fn test_missing_identifier_fails() {
        let container = Container::new();

        let error = container.make::<usize>("missing").unwrap_err();

        assert!(matches!(&error, ContainerError::ServiceNotFound(id) if id == "missing"));
        assert!(error.to_string().contains("missing"));
    }

    #[test]
    fn test_rebind_before_resolution_uses_new_factory() {
        let container = Container::new();
        container.bind("port", |_| Ok(8080_u16));
        container.bind("port", |_| Ok(9090_u16));

        assert_eq!(*container.make::<u16>("port").unwrap(), 9090);
    }

    #[test]
    fn test_rebind_after_resolution_evicts_cached_singleton() {
        let container = Container::new();
        container.singleton("name", |_| Ok("first".to_string()));
        assert_eq!(container.make::<String>("name").unwrap().as_str(), "first");

        container.singleton("name", |_| Ok("second".to_string()));

        assert!(!container.is_resolved("name"));
        assert_eq!(container.make::<String>("name").unwrap().as_str(), "second");
    }

    #[test]
    fn test_rebind_during_construction_discards_stale_value() {
        let container = Container::new();
        let (started_tx, started_rx) = mpsc::channel::<()>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let started_tx = Mutex::new(started_tx);
        let release_rx = Mutex::new(release_rx);
        container.singleton("service", move |_| {
            started_tx.lock().send(()).unwrap();
            release_rx.lock().recv().unwrap();
            Ok("stale".to_string())
        });

        thread::scope(|scope| {
            let slow = scope.spawn(|| container.make::<String>("service").unwrap());

            started_rx.recv().unwrap();
            container.singleton("service", |_| Ok("fresh".to_string()));
            release_tx.send(()).unwrap();

            assert_eq!(slow.join().unwrap().as_str(), "stale");
        });

        assert!(!container.is_resolved("service"));
        assert_eq!(container.make::<String>("service").unwrap().as_str(), "fresh");
        assert!(container.is_resolved("service"));
    }

    #[test]
    fn test_rebind_to_transient_drops_singleton_flag() {
        let container = Container::new();
        let counter = Arc::new(AtomicUsize::new(0));
        container.singleton("id", counter_factory(counter.clone()));
        container.make::<usize>("id").unwrap();

        container.bind("id", counter_factory(counter.clone()));

        assert!(!container.is_singleton("id"));
        assert_eq!(*container.make::<usize>("id").unwrap(), 2);
        assert_eq!(*container.make::<usize>("id").unwrap(), 3);
    }

    #[test]
    fn test_concurrent_first_resolution_installs_one_instance() {
        const CALLERS: usize = 16;

        struct Connection;

        let container = Container::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let factory_calls = calls.clone();
        container.singleton("connection", move |_| {
            factory_calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(10));
            Ok(Connection)
        });

        let barrier = Barrier::new(CALLERS);
        let resolved: Vec<Arc<Connection>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        container.make::<Connection>("connection").unwrap()
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let first = &resolved[0];
        assert!(resolved.iter().all(|instance| Arc::ptr_eq(instance, first)));
        let invoked = calls.load(Ordering::SeqCst);
        assert!((1..=CALLERS).contains(&invoked));

        container.make::<Connection>("connection").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), invoked);
    }

    #[test]
    fn test_factory_may_resolve_other_identifiers() {
        let container = Container::new();
        container.singleton("config", |_| Ok("mongodb://localhost".to_string()));
        container.singleton("database", |c| {
            let uri = c.make::<String>("config")?;
            Ok(format!("connected to {uri}"))
        });
        container.bind("repository", |c| {
            let database = c.make::<String>("database")?;
            Ok(database.len())
        });

        let length = container.make::<usize>("repository").unwrap();

        assert_eq!(*length, "connected to mongodb://localhost".len());
        assert!(container.is_resolved("config"));
        assert!(container.is_resolved("database"));
    }

    #[test]
    fn test_factory_error_is_propagated_and_retried() {
        let container = Container::new();
        let attempts = Arc::new(AtomicUsize::new(0));
        let factory_attempts = attempts.clone();
        container.singleton("flaky", move |_| {
            if factory_attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err("first attempt fails".into());
            }
            Ok(42_u32)
        });

        let error = container.make::<u32>("flaky").unwrap_err();
        assert!(matches!(error, ContainerError::Factory { ref id, .. } if id == "flaky"));
        assert!(!container.is_resolved("flaky"));

        assert_eq!(*container.make::<u32>("flaky").unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_nested_factory_error_is_not_swallowed() {
        let container = Container::new();
        container.bind("outer", |c| {
            let inner = c.make::<u32>("inner")?;
            Ok(*inner)
        });

        let error = container.make::<u32>("outer").unwrap_err();

        match error {
            ContainerError::Factory { id, source } => {
                assert_eq!(id, "outer");
                assert!(source.to_string().contains("inner"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_mismatch_is_distinct_from_not_found() {
        let container = Container::new();
        container.instance("port", 8080_u16);

        let error = container.make::<String>("port").unwrap_err();

        match error {
            ContainerError::TypeMismatch { id, expected, actual } => {
                assert_eq!(id, "port");
                assert_eq!(expected, type_name::<String>());
                assert_eq!(actual, "u16");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_instance_returns_same_value() {
        let container = Container::new();
        container.instance("name", "app_kernel".to_string());

        let first = container.make::<String>("name").unwrap();
        let second = container.make::<String>("name").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(container.is_singleton("name"));
    }

    #[test]
    fn test_forget_instance_rebuilds_on_next_make() {
        let container = Container::new();
        let counter = Arc::new(AtomicUsize::new(0));
        container.singleton("id", counter_factory(counter));
        container.make::<usize>("id").unwrap();

        assert!(container.forget_instance("id"));
        assert_eq!(*container.make::<usize>("id").unwrap(), 2);
        assert!(container.has("id"));
    }

    #[test]
    fn test_clones_share_bindings() {
        let container = Container::new();
        let clone = container.clone();
        clone.instance("shared", 7_i32);

        assert!(container.has("shared"));
        assert_eq!(container.len(), 1);
        assert_eq!(container.identifiers(), vec!["shared".to_string()]);
    }
}
