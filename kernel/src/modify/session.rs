use crate::entity::{Identity, SessionToken};
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SessionModifier: 'static + Sync + Send {
    async fn save<S: KeyValueStore>(
        &self,
        store: &S,
        token: &SessionToken,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError>;

    async fn refresh<S: KeyValueStore>(
        &self,
        store: &S,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError>;

    async fn clear<S: KeyValueStore>(&self, store: &S) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnSessionModifier: 'static + Sync + Send {
    type SessionModifier: SessionModifier;
    fn session_modifier(&self) -> &Self::SessionModifier;
}
