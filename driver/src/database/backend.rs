use error_stack::Report;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::KernelError;

use crate::database::{InMemoryStore, RedisStore, RemoteStore};
use crate::env;
use crate::remote::RemoteApi;

const STOREFRONT_STORAGE: &str = "STOREFRONT_STORAGE";

/// Storage chosen at start-up through `STOREFRONT_STORAGE`.
pub enum StorageBackend {
    Memory(InMemoryStore),
    Redis(RedisStore),
    Remote(RemoteStore<InMemoryStore>),
}

impl StorageBackend {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let kind = env(STOREFRONT_STORAGE).unwrap_or_else(|_| "memory".to_string());
        match kind.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory(InMemoryStore::new())),
            "redis" => Ok(StorageBackend::Redis(RedisStore::new()?)),
            "remote" => {
                let api = RemoteApi::from_env(InMemoryStore::new())?;
                Ok(StorageBackend::Remote(RemoteStore::new(api)))
            }
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown storage backend `{other}`"))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory(_) => "memory",
            StorageBackend::Redis(_) => "redis",
            StorageBackend::Remote(_) => "remote",
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for StorageBackend {
    async fn read(&self, key: StorageKey) -> error_stack::Result<Option<String>, KernelError> {
        match self {
            StorageBackend::Memory(store) => store.read(key).await,
            StorageBackend::Redis(store) => store.read(key).await,
            StorageBackend::Remote(store) => store.read(key).await,
        }
    }

    async fn write(&self, key: StorageKey, blob: String) -> error_stack::Result<(), KernelError> {
        match self {
            StorageBackend::Memory(store) => store.write(key, blob).await,
            StorageBackend::Redis(store) => store.write(key, blob).await,
            StorageBackend::Remote(store) => store.write(key, blob).await,
        }
    }

    async fn remove(&self, key: StorageKey) -> error_stack::Result<(), KernelError> {
        match self {
            StorageBackend::Memory(store) => store.remove(key).await,
            StorageBackend::Redis(store) => store.remove(key).await,
            StorageBackend::Remote(store) => store.remove(key).await,
        }
    }
}
