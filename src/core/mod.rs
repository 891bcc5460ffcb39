//! # Core Framework Module
//!
//! 서버 애플리케이션을 위한 최소 런타임입니다. 의존성 주입 컨테이너와
//! 2단계(register → boot) 프로바이더 부팅 프로토콜을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`container`] - 서비스 컨테이너
//! - **Binding**: 식별자 → (팩토리, 싱글톤 여부) 등록
//! - **지연 생성**: `make` 시점에 팩토리 실행, 싱글톤은 한 번만 생성
//! - **재진입**: 팩토리는 `&Container`를 받아 다른 서비스를 해석할 수 있음
//! - **Thread-safe**: 하나의 `RwLock`이 바인딩과 인스턴스 캐시를 함께 보호
//!
//! ### [`application`] - 애플리케이션 부팅
//! - 프로바이더 목록과 부팅 상태 머신 (`Unbooted → Registering → Booting → Booted`)
//! - 내장 프로바이더: Config → Router → Database
//!
//! ### [`provider`] - 프로바이더 계약
//!
//! ### [`errors`] - 컨테이너 에러
//!
//! ## 기본 사용법
//!
//! ```rust
//! use app_kernel::core::Container;
//!
//! let container = Container::new();
//! container.singleton("greeting", |_| Ok("hello".to_string()));
//!
//! let first = container.make::<String>("greeting").unwrap();
//! let second = container.make::<String>("greeting").unwrap();
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! ```
//!
//! ## 타입 소거
//!
//! 컨테이너는 값을 `Arc<dyn Any + Send + Sync>`로 보관합니다. `make::<T>`는 요청한
//! 타입으로 다운캐스트하며, 실패하면 `ServiceNotFound`와 구분되는
//! `TypeMismatch`를 반환합니다. 트레이트 객체는 `Arc<dyn Trait>`을 값으로 바인딩하고
//! `make::<Arc<dyn Trait>>`로 꺼냅니다.

pub mod application;
pub mod binding;
pub mod bindings;
pub mod container;
pub mod errors;
pub mod instances;
pub mod provider;

pub use application::{Application, BootState};
pub use binding::{Factory, FactoryFn, Service};
pub use container::Container;
pub use errors::{BoxError, ContainerError, ContainerResult};
pub use provider::ServiceProvider;
