use std::collections::HashMap;
use std::sync::Arc;

use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::KernelError;
use tokio::sync::RwLock;

/// Process-local storage. Clones share the same blobs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    blobs: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryStore {
    async fn read(&self, key: StorageKey) -> error_stack::Result<Option<String>, KernelError> {
        Ok(self.blobs.read().await.get(&key).cloned())
    }

    async fn write(&self, key: StorageKey, blob: String) -> error_stack::Result<(), KernelError> {
        self.blobs.write().await.insert(key, blob);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> error_stack::Result<(), KernelError> {
        self.blobs.write().await.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::storage::{KeyValueStore, StorageKey};
    use kernel::KernelError;

    use crate::database::InMemoryStore;

    #[tokio::test]
    async fn clones_share_blobs() -> error_stack::Result<(), KernelError> {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.write(StorageKey::Token, "abc".to_string()).await?;
        assert_eq!(other.read(StorageKey::Token).await?, Some("abc".to_string()));

        other.remove(StorageKey::Token).await?;
        assert_eq!(store.read(StorageKey::Token).await?, None);
        other.remove(StorageKey::Token).await?;
        Ok(())
    }
}
