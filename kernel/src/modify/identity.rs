use crate::entity::Identity;
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait IdentityModifier: 'static + Sync + Send {
    async fn create<S: KeyValueStore>(
        &self,
        store: &S,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError>;

    async fn update<S: KeyValueStore>(
        &self,
        store: &S,
        identity: &Identity,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnIdentityModifier: 'static + Sync + Send {
    type IdentityModifier: IdentityModifier;
    fn identity_modifier(&self) -> &Self::IdentityModifier;
}
