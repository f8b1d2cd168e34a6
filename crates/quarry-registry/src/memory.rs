use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::registry::{DependencyPath, PackageRegistry, RegistryError};

/// In-process registry keyed by logical name.
///
/// Last registration wins, matching the harness registry's overwrite
/// behavior on repeated installs of the same package.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    entries: RwLock<HashMap<String, DependencyPath>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageRegistry for MemoryRegistry {
    async fn get_package(&self, name: &str) -> Result<Option<DependencyPath>, RegistryError> {
        let entries = self.entries.read().map_err(|_| RegistryError::Lookup {
            name: name.to_string(),
            reason: "registry lock poisoned".to_string(),
        })?;
        Ok(entries.get(name).cloned())
    }

    async fn register_package(&self, dep: DependencyPath) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().map_err(|_| RegistryError::Register {
            name: dep.name.clone(),
            reason: "registry lock poisoned".to_string(),
        })?;
        entries.insert(dep.name.clone(), dep);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_package_is_none() {
        let registry = MemoryRegistry::new();
        assert_eq!(registry.get_package("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn register_then_lookup() {
        let registry = MemoryRegistry::new();
        let dep = DependencyPath::new("jdk", "/opt/packages/jdk-21");
        registry.register_package(dep.clone()).await.unwrap();
        assert_eq!(registry.get_package("jdk").await.unwrap(), Some(dep));
    }

    #[tokio::test]
    async fn reregistration_overwrites() {
        let registry = MemoryRegistry::new();
        registry
            .register_package(DependencyPath::new("jdk", "/opt/packages/jdk-17"))
            .await
            .unwrap();
        registry
            .register_package(DependencyPath::new("jdk", "/opt/packages/jdk-21"))
            .await
            .unwrap();
        let dep = registry.get_package("jdk").await.unwrap().unwrap();
        assert_eq!(dep.path, std::path::PathBuf::from("/opt/packages/jdk-21"));
    }
}
