use crate::entity::{IdentityId, Order, OrderId, StoreId};
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderQuery: Sync + Send + 'static {
    async fn find_by_id<S: KeyValueStore>(
        &self,
        store: &S,
        id: &OrderId,
    ) -> error_stack::Result<Option<Order>, KernelError>;

    async fn find_by_user<S: KeyValueStore>(
        &self,
        store: &S,
        user_id: &IdentityId,
    ) -> error_stack::Result<Vec<Order>, KernelError>;

    async fn find_by_store<S: KeyValueStore>(
        &self,
        store: &S,
        store_id: &StoreId,
    ) -> error_stack::Result<Vec<Order>, KernelError>;
}

pub trait DependOnOrderQuery: Sync + Send + 'static {
    type OrderQuery: OrderQuery;
    fn order_query(&self) -> &Self::OrderQuery;
}
