//! 싱글톤 인스턴스 캐시
//!
//! 싱글톤으로 표시된 식별자의 첫 해석 결과를 보관합니다.
//! 식별자가 다시 바인딩되거나 `forget_instance`가 호출되면 무효화됩니다.

use std::collections::HashMap;

use super::binding::Service;

#[derive(Default)]
pub struct InstanceCache {
    instances: HashMap<String, Service>,
}

impl InstanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Service> {
        self.instances.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.instances.contains_key(id)
    }

    /// 인스턴스를 설치합니다. 이미 있으면 기존 값을 유지하고 그것을 반환합니다.
    pub fn install(&mut self, id: &str, instance: Service) -> Service {
        self.instances
            .entry(id.to_string())
            .or_insert(instance)
            .clone()
    }

    pub fn evict(&mut self, id: &str) -> Option<Service> {
        self.instances.remove(id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_install_keeps_first_instance() {
        let mut cache = InstanceCache::new();
        let first: Service = Arc::new(1_u32);
        let second: Service = Arc::new(2_u32);

        let installed = cache.install("counter", first.clone());
        let winner = cache.install("counter", second);

        assert!(Arc::ptr_eq(&installed, &first));
        assert!(Arc::ptr_eq(&winner, &first));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_evict() {
        let mut cache = InstanceCache::new();
        cache.install("counter", Arc::new(1_u32));

        assert!(cache.evict("counter").is_some());
        assert!(!cache.contains("counter"));
        assert!(cache.is_empty());
        assert!(cache.evict("counter").is_none());
    }
}
