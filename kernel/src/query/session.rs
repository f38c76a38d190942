use crate::entity::Identity;
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SessionQuery: Sync + Send + 'static {
    /// A record that cannot be decoded is discarded and reads as absent.
    /// Storage failures are returned as they are.
    async fn find_current<S: KeyValueStore>(
        &self,
        store: &S,
    ) -> error_stack::Result<Option<Identity>, KernelError>;
}

pub trait DependOnSessionQuery: Sync + Send + 'static {
    type SessionQuery: SessionQuery;
    fn session_query(&self) -> &Self::SessionQuery;
}
