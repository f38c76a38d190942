use kernel::interface::query::SessionQuery;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::interface::update::SessionModifier;
use kernel::prelude::entity::{Identity, SessionToken};
use kernel::KernelError;
use tracing::warn;

use crate::repository::BlobInternal;

/// The token is kept verbatim under `token`; the identity record as JSON under `user`.
pub struct StoredSessionRepository;

#[async_trait::async_trait]
impl SessionQuery for StoredSessionRepository {
    #[tracing::instrument(skip_all)]
    async fn find_current<S: KeyValueStore>(
        &self,
        store: &S,
    ) -> error_stack::Result<Option<Identity>, KernelError> {
        let Some(blob) = store.read(StorageKey::CurrentIdentity).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&blob) {
            Ok(identity) => Ok(Some(identity)),
            Err(error) => {
                warn!("Discarding unreadable session record: {error}");
                self.clear(store).await?;
                Ok(None)
            }
        }
    }
}

#[async_trait::async_trait]
impl SessionModifier for StoredSessionRepository {
    async fn save<S: KeyValueStore>(
        &self,
        store: &S,
        token: &SessionToken,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError> {
        store
            .write(StorageKey::Token, token.as_ref().to_string())
            .await?;
        self.refresh(store, identity).await
    }

    async fn refresh<S: KeyValueStore>(
        &self,
        store: &S,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError> {
        BlobInternal::save(store, StorageKey::CurrentIdentity, identity).await
    }

    async fn clear<S: KeyValueStore>(&self, store: &S) -> error_stack::Result<(), KernelError> {
        store.remove(StorageKey::Token).await?;
        store.remove(StorageKey::CurrentIdentity).await
    }
}
