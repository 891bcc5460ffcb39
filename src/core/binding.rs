//! # Binding Registry
//!
//! 식별자(문자열 키)별로 팩토리와 싱글톤 여부를 저장하는 레지스트리입니다.
//! 바인딩은 항상 `(팩토리, 싱글톤 플래그)` 쌍으로 한 번에 교체되므로
//! 읽는 쪽에서 일부만 갱신된 상태를 볼 수 없습니다.
//!
//! 바인딩은 절대 실패하지 않습니다. 팩토리 검증은 해석 시점으로 미뤄집니다.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::container::Container;
use super::errors::BoxError;

/// 타입이 지워진 서비스 값
pub type Service = Arc<dyn Any + Send + Sync>;

/// 컨테이너를 인자로 받아 서비스를 생성하는 클로저
pub type FactoryFn = Arc<dyn Fn(&Container) -> Result<Service, BoxError> + Send + Sync>;

/// 바인딩된 서비스의 생성 방법
#[derive(Clone)]
pub enum Factory {
    /// 해석할 때마다 호출되는 클로저
    Callable(FactoryFn),
    /// 이미 만들어진 값. 매번 같은 값을 돌려줍니다.
    Prebuilt(Service),
}

impl Factory {
    /// 서비스를 생성합니다. 호출자는 어떤 잠금도 잡고 있지 않아야 합니다.
    pub(crate) fn produce(&self, container: &Container) -> Result<Service, BoxError> {
        match self {
            Factory::Callable(factory) => factory(container),
            Factory::Prebuilt(value) => Ok(value.clone()),
        }
    }
}

/// 하나의 식별자에 대한 바인딩
#[derive(Clone)]
pub struct Binding {
    pub(crate) factory: Factory,
    pub(crate) singleton: bool,
    /// 바인딩이 교체될 때마다 증가하는 세대 번호
    pub(crate) generation: u64,
    /// 팩토리가 생성하는 값의 타입 이름 (에러 메시지용)
    pub(crate) type_name: &'static str,
}

impl Binding {
    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[derive(Default)]
pub struct BindingRegistry {
    bindings: HashMap<String, Binding>,
    next_generation: u64,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 바인딩을 등록하거나 교체하고, 새 세대 번호를 반환합니다.
    pub fn insert(
        &mut self,
        id: String,
        factory: Factory,
        singleton: bool,
        type_name: &'static str,
    ) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;

        self.bindings.insert(
            id,
            Binding {
                factory,
                singleton,
                generation,
                type_name,
            },
        );

        generation
    }

    pub fn get(&self, id: &str) -> Option<&Binding> {
        self.bindings.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    /// 현재 바인딩의 세대 번호. 바인딩이 없으면 `None`.
    pub fn generation_of(&self, id: &str) -> Option<u64> {
        self.bindings.get(id).map(|binding| binding.generation)
    }

    /// 등록된 식별자 목록 (정렬됨)
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.bindings.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prebuilt(value: u32) -> Factory {
        Factory::Prebuilt(Arc::new(value))
    }

    #[test]
    fn test_insert_replaces_binding_as_a_pair() {
        let mut registry = BindingRegistry::new();

        let first = registry.insert("port".to_string(), prebuilt(1), true, "u32");
        let second = registry.insert("port".to_string(), prebuilt(2), false, "u32");

        let binding = registry.get("port").unwrap();
        assert!(second > first);
        assert_eq!(binding.generation, second);
        assert!(!binding.is_singleton());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_generation_of_unknown_identifier() {
        let registry = BindingRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.generation_of("missing"), None);
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn test_identifiers_are_sorted() {
        let mut registry = BindingRegistry::new();
        registry.insert("b".to_string(), prebuilt(1), false, "u32");
        registry.insert("a".to_string(), prebuilt(2), false, "u32");

        assert_eq!(registry.identifiers(), vec!["a".to_string(), "b".to_string()]);
    }
}
