use error_stack::Report;
use kernel::interface::query::OrderQuery;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::interface::update::OrderModifier;
use kernel::prelude::entity::{IdentityId, Order, OrderId, StoreId};
use kernel::KernelError;

use crate::repository::BlobInternal;

/// All orders, kept as one JSON array under `orders` in creation order.
pub struct StoredOrderRepository;

#[async_trait::async_trait]
impl OrderQuery for StoredOrderRepository {
    async fn find_by_id<S: KeyValueStore>(
        &self,
        store: &S,
        id: &OrderId,
    ) -> error_stack::Result<Option<Order>, KernelError> {
        let orders = OrderInternal::all(store).await?;
        Ok(orders.into_iter().find(|order| order.id() == id))
    }

    async fn find_by_user<S: KeyValueStore>(
        &self,
        store: &S,
        user_id: &IdentityId,
    ) -> error_stack::Result<Vec<Order>, KernelError> {
        let orders = OrderInternal::all(store).await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.user_id() == user_id)
            .collect())
    }

    async fn find_by_store<S: KeyValueStore>(
        &self,
        store: &S,
        store_id: &StoreId,
    ) -> error_stack::Result<Vec<Order>, KernelError> {
        let orders = OrderInternal::all(store).await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.store_id() == store_id)
            .collect())
    }
}

#[async_trait::async_trait]
impl OrderModifier for StoredOrderRepository {
    #[tracing::instrument(skip_all, fields(id = %order.id().as_ref()))]
    async fn create<S: KeyValueStore>(
        &self,
        store: &S,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        let mut orders = OrderInternal::all(store).await?;
        orders.push(order.clone());
        OrderInternal::save(store, &orders).await
    }

    #[tracing::instrument(skip_all, fields(id = %order.id().as_ref(), status = %order.status()))]
    async fn update<S: KeyValueStore>(
        &self,
        store: &S,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        let mut orders = OrderInternal::all(store).await?;
        let Some(stored) = orders.iter_mut().find(|stored| stored.id() == order.id()) else {
            return Err(Report::new(KernelError::OrderNotFound)
                .attach_printable(format!("order `{}`", order.id().as_ref())));
        };
        *stored = order.clone();
        OrderInternal::save(store, &orders).await
    }

    #[tracing::instrument(skip_all, fields(id = %order_id.as_ref()))]
    async fn delete<S: KeyValueStore>(
        &self,
        store: &S,
        order_id: &OrderId,
    ) -> error_stack::Result<(), KernelError> {
        let mut orders = OrderInternal::all(store).await?;
        let before = orders.len();
        orders.retain(|order| order.id() != order_id);
        if orders.len() == before {
            return Ok(());
        }
        OrderInternal::save(store, &orders).await
    }
}

pub(in crate::repository) struct OrderInternal;

impl OrderInternal {
    async fn all<S: KeyValueStore>(store: &S) -> error_stack::Result<Vec<Order>, KernelError> {
        BlobInternal::load(store, StorageKey::Orders).await
    }

    async fn save<S: KeyValueStore>(
        store: &S,
        orders: &[Order],
    ) -> error_stack::Result<(), KernelError> {
        BlobInternal::save(store, StorageKey::Orders, orders).await
    }
}
