use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::KernelError;
use serde::{Deserialize, Serialize};

use crate::remote::RemoteApi;

#[derive(Debug, Serialize, Deserialize)]
struct StoredBlob {
    blob: String,
}

/// Collections live behind the storefront API; the token and the current
/// identity record stay in the local store next to the client.
pub struct RemoteStore<S> {
    api: RemoteApi<S>,
}

impl<S: KeyValueStore> RemoteStore<S> {
    pub fn new(api: RemoteApi<S>) -> Self {
        Self { api }
    }

    fn path(key: StorageKey) -> String {
        format!("/storage/{key}")
    }

    fn is_local(key: StorageKey) -> bool {
        matches!(key, StorageKey::Token | StorageKey::CurrentIdentity)
    }
}

#[async_trait::async_trait]
impl<S: KeyValueStore> KeyValueStore for RemoteStore<S> {
    async fn read(&self, key: StorageKey) -> error_stack::Result<Option<String>, KernelError> {
        if Self::is_local(key) {
            return self.api.local().read(key).await;
        }
        match self.api.get::<StoredBlob>(&Self::path(key)).await {
            Ok(stored) => Ok(Some(stored.blob)),
            Err(report) if *report.current_context() == KernelError::NotFound => Ok(None),
            Err(report) => Err(report),
        }
    }

    async fn write(&self, key: StorageKey, blob: String) -> error_stack::Result<(), KernelError> {
        if Self::is_local(key) {
            return self.api.local().write(key, blob).await;
        }
        self.api
            .put::<_, ()>(&Self::path(key), &StoredBlob { blob })
            .await
    }

    async fn remove(&self, key: StorageKey) -> error_stack::Result<(), KernelError> {
        if Self::is_local(key) {
            return self.api.local().remove(key).await;
        }
        match self.api.delete::<()>(&Self::path(key)).await {
            Err(report) if *report.current_context() != KernelError::NotFound => Err(report),
            _ => Ok(()),
        }
    }
}
