use crate::entity::{Cart, IdentityId};
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartQuery: Sync + Send + 'static {
    /// An owner without a stored cart gets an empty one.
    async fn find_by_owner<S: KeyValueStore>(
        &self,
        store: &S,
        owner: &IdentityId,
    ) -> error_stack::Result<Cart, KernelError>;
}

pub trait DependOnCartQuery: Sync + Send + 'static {
    type CartQuery: CartQuery;
    fn cart_query(&self) -> &Self::CartQuery;
}
