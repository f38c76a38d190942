use crate::entity::{Order, OrderId};
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait OrderModifier: 'static + Sync + Send {
    async fn create<S: KeyValueStore>(
        &self,
        store: &S,
        order: &Order,
    ) -> error_stack::Result<(), KernelError>;

    async fn update<S: KeyValueStore>(
        &self,
        store: &S,
        order: &Order,
    ) -> error_stack::Result<(), KernelError>;

    /// Absent orders are not an error.
    async fn delete<S: KeyValueStore>(
        &self,
        store: &S,
        order_id: &OrderId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnOrderModifier: 'static + Sync + Send {
    type OrderModifier: OrderModifier;
    fn order_modifier(&self) -> &Self::OrderModifier;
}
