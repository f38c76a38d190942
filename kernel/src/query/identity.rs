use crate::entity::{Email, Identity, IdentityId};
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait IdentityQuery: Sync + Send + 'static {
    async fn find_by_id<S: KeyValueStore>(
        &self,
        store: &S,
        id: &IdentityId,
    ) -> error_stack::Result<Option<Identity>, KernelError>;

    async fn find_by_email<S: KeyValueStore>(
        &self,
        store: &S,
        email: &Email,
    ) -> error_stack::Result<Option<Identity>, KernelError>;
}

pub trait DependOnIdentityQuery: Sync + Send + 'static {
    type IdentityQuery: IdentityQuery;
    fn identity_query(&self) -> &Self::IdentityQuery;
}
