use error_stack::Report;
use tracing::{debug, warn};
use uuid::Uuid;

use kernel::interface::query::{CartQuery, DependOnCartQuery, DependOnOrderQuery, OrderQuery};
use kernel::interface::storage::DependOnKeyValueStore;
use kernel::interface::update::{
    CartModifier, DependOnCartModifier, DependOnOrderModifier, OrderModifier,
};
use kernel::prelude::entity::{
    Delivery, IdentityId, Order, OrderId, StatusTransition, StoreId,
};
use kernel::KernelError;

use crate::service::cart::active_cart;
use crate::state::{DependOnCartState, DependOnOrderState, DependOnSessionContext};
use crate::transfer::{
    CreateOrderDto, DeleteOrderDto, GetOrderDto, GetStoreOrdersDto, GetUserOrdersDto,
};

#[async_trait::async_trait]
pub trait CreateOrderService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnOrderState
    + DependOnCartQuery
    + DependOnCartModifier
    + DependOnOrderModifier
{
    /// The order is stored before the cart is emptied. If emptying the stored
    /// cart fails, the order is removed again and the failure returned.
    async fn create_order(&self, dto: CreateOrderDto) -> error_stack::Result<Order, KernelError> {
        let operation = async move {
            let store = self.key_value_store();
            let identity = self.session_context().require().await?;
            let mut cart = active_cart(self, &identity).await?;
            let order = Order::place(OrderId::new(Uuid::new_v4()), &cart, Delivery::from(dto))?;

            self.order_modifier().create(store, &order).await?;
            cart.clear();
            if let Err(report) = self.cart_modifier().save(store, &cart).await {
                warn!(
                    "Withdrawing order {} after cart could not be cleared",
                    order.id().as_ref()
                );
                if let Err(rollback) = self.order_modifier().delete(store, order.id()).await {
                    warn!("Failed to withdraw order: {rollback:?}");
                }
                return Err(report);
            }

            self.cart_state().replace(Some(cart)).await;
            self.order_state().replace_current(Some(order.clone())).await;
            debug!("Order {} placed", order.id().as_ref());
            Ok(order)
        };
        self.order_state().progress().track(operation).await
    }
}

impl<T> CreateOrderService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnOrderState
        + DependOnCartQuery
        + DependOnCartModifier
        + DependOnOrderModifier
{
}

async fn transit<T>(
    module: &T,
    id: Uuid,
    transition: StatusTransition,
) -> error_stack::Result<Order, KernelError>
where
    T: ?Sized + DependOnKeyValueStore + DependOnOrderState + DependOnOrderQuery + DependOnOrderModifier,
{
    let store = module.key_value_store();
    let mut order = module
        .order_query()
        .find_by_id(store, &OrderId::new(id))
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::OrderNotFound).attach_printable(format!("order `{id}`"))
        })?;
    order.transit(transition)?;
    module.order_modifier().update(store, &order).await?;

    let state = module.order_state();
    let mut orders = state.orders().await;
    if let Some(listed) = orders.iter_mut().find(|listed| listed.id() == order.id()) {
        *listed = order.clone();
        state.replace_orders(orders).await;
    }
    state.replace_current(Some(order.clone())).await;
    debug!("Order {id} is now {}", order.status());
    Ok(order)
}

/// Status transitions. Each fails with `OrderNotFound` for an unknown id and
/// with `InvalidStatus` when the current status does not allow the move.
#[async_trait::async_trait]
pub trait TransitOrderService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnOrderState
    + DependOnOrderQuery
    + DependOnOrderModifier
{
    /// Only a pending order can be paid; it moves straight to shipped.
    async fn pay(&self, id: Uuid) -> error_stack::Result<Order, KernelError> {
        let operation = transit(self, id, StatusTransition::Pay);
        self.order_state().progress().track(operation).await
    }

    async fn ship(&self, id: Uuid) -> error_stack::Result<Order, KernelError> {
        let operation = transit(self, id, StatusTransition::Ship);
        self.order_state().progress().track(operation).await
    }

    async fn confirm_received(&self, id: Uuid) -> error_stack::Result<Order, KernelError> {
        let operation = transit(self, id, StatusTransition::ConfirmReceived);
        self.order_state().progress().track(operation).await
    }

    async fn cancel(&self, id: Uuid) -> error_stack::Result<Order, KernelError> {
        let operation = transit(self, id, StatusTransition::Cancel);
        self.order_state().progress().track(operation).await
    }
}

impl<T> TransitOrderService for T where
    T: DependOnKeyValueStore + DependOnOrderState + DependOnOrderQuery + DependOnOrderModifier
{
}

#[async_trait::async_trait]
pub trait DeleteOrderService:
    'static + Sync + Send + DependOnKeyValueStore + DependOnOrderState + DependOnOrderModifier
{
    async fn delete_order(&self, dto: DeleteOrderDto) -> error_stack::Result<(), KernelError> {
        let operation = async move {
            let id = OrderId::new(dto.id);
            self.order_modifier()
                .delete(self.key_value_store(), &id)
                .await?;

            let state = self.order_state();
            let mut orders = state.orders().await;
            orders.retain(|order| order.id() != &id);
            state.replace_orders(orders).await;
            if state.current_order().await.is_some_and(|order| order.id() == &id) {
                state.replace_current(None).await;
            }
            Ok(())
        };
        self.order_state().progress().track(operation).await
    }
}

impl<T> DeleteOrderService for T where
    T: DependOnKeyValueStore + DependOnOrderState + DependOnOrderModifier
{
}

#[async_trait::async_trait]
pub trait GetOrderService:
    'static + Sync + Send + DependOnKeyValueStore + DependOnOrderState + DependOnOrderQuery
{
    async fn get_order(&self, dto: GetOrderDto) -> error_stack::Result<Order, KernelError> {
        let operation = async move {
            let order = self
                .order_query()
                .find_by_id(self.key_value_store(), &OrderId::new(dto.id))
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::OrderNotFound)
                        .attach_printable(format!("order `{}`", dto.id))
                })?;
            self.order_state().replace_current(Some(order.clone())).await;
            Ok(order)
        };
        self.order_state().progress().track(operation).await
    }
}

impl<T> GetOrderService for T where
    T: DependOnKeyValueStore + DependOnOrderState + DependOnOrderQuery
{
}

/// Listing never fails: a storage failure is recorded on the order state and
/// an empty list returned.
#[async_trait::async_trait]
pub trait ListOrdersService:
    'static + Sync + Send + DependOnKeyValueStore + DependOnOrderState + DependOnOrderQuery
{
    async fn list_for_user(&self, dto: GetUserOrdersDto) -> Vec<Order> {
        let operation = async move {
            self.order_query()
                .find_by_user(self.key_value_store(), &IdentityId::new(dto.user_id))
                .await
        };
        let result = self.order_state().progress().track(operation).await;
        publish(self, result).await
    }

    async fn list_for_store(&self, dto: GetStoreOrdersDto) -> Vec<Order> {
        let operation = async move {
            self.order_query()
                .find_by_store(self.key_value_store(), &StoreId::new(dto.store_id))
                .await
        };
        let result = self.order_state().progress().track(operation).await;
        publish(self, result).await
    }
}

impl<T> ListOrdersService for T where
    T: DependOnKeyValueStore + DependOnOrderState + DependOnOrderQuery
{
}

async fn publish<T>(module: &T, result: error_stack::Result<Vec<Order>, KernelError>) -> Vec<Order>
where
    T: ?Sized + DependOnOrderState,
{
    let orders = match result {
        Ok(orders) => orders,
        Err(report) => {
            warn!("Failed to list orders: {report:?}");
            Vec::new()
        }
    };
    module.order_state().replace_orders(orders.clone()).await;
    orders
}

#[async_trait::async_trait]
pub trait ListMyOrdersService: ListOrdersService + DependOnSessionContext {
    async fn list_mine(&self) -> error_stack::Result<Vec<Order>, KernelError> {
        let identity = match self.session_context().require().await {
            Ok(identity) => identity,
            Err(report) => {
                self.order_state().progress().fail(&report).await;
                return Err(report);
            }
        };
        let dto = GetUserOrdersDto {
            user_id: *identity.id().as_ref(),
        };
        Ok(self.list_for_user(dto).await)
    }
}

impl<T> ListMyOrdersService for T where T: ListOrdersService + DependOnSessionContext {}

#[cfg(test)]
mod test {
    use kernel::interface::query::{CartQuery, OrderQuery};
    use kernel::interface::storage::StorageKey;
    use kernel::prelude::entity::{Money, OrderStatus, Quantity};
    use kernel::KernelError;
    use driver::repository::{StoredCartRepository, StoredOrderRepository};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::service::{
        AddCartItemService, CreateOrderService, DeleteOrderService, GetOrderService,
        ListMyOrdersService, ListOrdersService, LogoutService, RegisterService,
        TransitOrderService,
    };
    use crate::state::{DependOnCartState, DependOnOrderState};
    use crate::test::{book, create_order_dto, register_dto, FailingStore, TestModule};
    use crate::transfer::{
        AddCartItemDto, DeleteOrderDto, GetOrderDto, GetStoreOrdersDto, GetUserOrdersDto,
    };

    async fn module_with_cart() -> error_stack::Result<TestModule, KernelError> {
        let module = TestModule::in_memory();
        module.register(register_dto("reader@example.com")).await?;
        module
            .add_item(AddCartItemDto {
                book: book(1, 598),
                quantity: Quantity::parse(3).unwrap(),
            })
            .await?;
        Ok(module)
    }

    #[tokio::test]
    async fn create_requires_session_and_items() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let report = module.create_order(create_order_dto()).await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::NotAuthenticated);

        let identity = module.register(register_dto("reader@example.com")).await?;
        let report = module.create_order(create_order_dto()).await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::EmptyCart);
        let progress = module.order_state().progress().snapshot().await;
        assert_eq!(progress.error, Some(KernelError::EmptyCart.to_string()));
        let orders = StoredOrderRepository
            .find_by_user(module.store(), identity.id())
            .await?;
        assert!(orders.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_snapshots_cart_and_clears_it() -> error_stack::Result<(), KernelError> {
        let module = module_with_cart().await?;
        let order = module.create_order(create_order_dto()).await?;

        assert_eq!(*order.status(), OrderStatus::Pending);
        assert_eq!(*order.total_amount(), Money::new(Decimal::new(1794, 1)));
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.delivery().address(), "1 Main St");
        assert!(module.cart_state().view().await.unwrap().is_empty());
        assert_eq!(module.order_state().current_order().await, Some(order.clone()));

        let stored = StoredCartRepository
            .find_by_owner(module.store(), order.user_id())
            .await?;
        assert!(stored.is_empty());
        let stored = StoredOrderRepository
            .find_by_id(module.store(), order.id())
            .await?;
        assert_eq!(stored, Some(order));
        Ok(())
    }

    #[tokio::test]
    async fn failed_order_write_keeps_cart() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(FailingStore::default());
        let identity = module.register(register_dto("reader@example.com")).await?;
        module
            .add_item(AddCartItemDto {
                book: book(1, 598),
                quantity: Quantity::parse(2).unwrap(),
            })
            .await?;

        module.store().fail_on(Some(StorageKey::Orders)).await;
        let report = module.create_order(create_order_dto()).await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Internal);

        let cart = StoredCartRepository
            .find_by_owner(module.store(), identity.id())
            .await?;
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(module.cart_state().total_item_count().await, 2);
        assert_eq!(module.order_state().current_order().await, None);

        module.store().fail_on(None).await;
        let orders = StoredOrderRepository
            .find_by_user(module.store(), identity.id())
            .await?;
        assert!(orders.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failed_cart_clear_withdraws_order() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(FailingStore::default());
        let identity = module.register(register_dto("reader@example.com")).await?;
        module
            .add_item(AddCartItemDto {
                book: book(1, 598),
                quantity: Quantity::parse(2).unwrap(),
            })
            .await?;

        module.store().fail_on(Some(StorageKey::Carts)).await;
        let report = module.create_order(create_order_dto()).await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Internal);
        module.store().fail_on(None).await;

        let orders = StoredOrderRepository
            .find_by_user(module.store(), identity.id())
            .await?;
        assert!(orders.is_empty());
        let cart = StoredCartRepository
            .find_by_owner(module.store(), identity.id())
            .await?;
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(module.cart_state().total_item_count().await, 2);
        assert_eq!(module.order_state().current_order().await, None);
        Ok(())
    }

    #[tokio::test]
    async fn pay_only_from_pending() -> error_stack::Result<(), KernelError> {
        let module = module_with_cart().await?;
        let order = module.create_order(create_order_dto()).await?;
        let id = *order.id().as_ref();

        let paid = module.pay(id).await?;
        assert_eq!(*paid.status(), OrderStatus::Shipped);
        assert!(paid.updated_at().as_ref() >= order.updated_at().as_ref());

        let report = module.pay(id).await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::InvalidStatus);
        let stored = module.get_order(GetOrderDto { id }).await?;
        assert_eq!(*stored.status(), OrderStatus::Shipped);
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_is_terminal() -> error_stack::Result<(), KernelError> {
        let module = module_with_cart().await?;
        let order = module.create_order(create_order_dto()).await?;
        let id = *order.id().as_ref();

        let cancelled = module.cancel(id).await?;
        assert_eq!(*cancelled.status(), OrderStatus::Cancelled);
        for report in [
            module.pay(id).await.unwrap_err(),
            module.ship(id).await.unwrap_err(),
            module.confirm_received(id).await.unwrap_err(),
        ] {
            assert_eq!(*report.current_context(), KernelError::InvalidStatus);
        }
        let stored = module.get_order(GetOrderDto { id }).await?;
        assert_eq!(*stored.status(), OrderStatus::Cancelled);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_orders() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let id = Uuid::new_v4();
        for report in [
            module.pay(id).await.unwrap_err(),
            module.ship(id).await.unwrap_err(),
            module.confirm_received(id).await.unwrap_err(),
            module.cancel(id).await.unwrap_err(),
            module.get_order(GetOrderDto { id }).await.unwrap_err(),
        ] {
            assert_eq!(*report.current_context(), KernelError::OrderNotFound);
        }
        module.delete_order(DeleteOrderDto { id }).await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_order() -> error_stack::Result<(), KernelError> {
        let module = module_with_cart().await?;
        let order = module.create_order(create_order_dto()).await?;
        let id = *order.id().as_ref();
        module.list_mine().await?;

        module.delete_order(DeleteOrderDto { id }).await?;
        assert!(module.order_state().orders().await.is_empty());
        assert_eq!(module.order_state().current_order().await, None);
        let report = module.get_order(GetOrderDto { id }).await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::OrderNotFound);
        Ok(())
    }

    #[tokio::test]
    async fn listing_by_user_and_store() -> error_stack::Result<(), KernelError> {
        let module = module_with_cart().await?;
        let first = module.create_order(create_order_dto()).await?;
        module
            .add_item(AddCartItemDto {
                book: book(2, 1000),
                quantity: Quantity::parse(1).unwrap(),
            })
            .await?;
        let second = module.create_order(create_order_dto()).await?;

        let mine = module.list_mine().await?;
        assert_eq!(mine, vec![first.clone(), second.clone()]);
        assert_eq!(module.order_state().orders().await, mine);

        let by_store = module
            .list_for_store(GetStoreOrdersDto { store_id: 2 })
            .await;
        assert_eq!(by_store, vec![second]);
        let nobody = module
            .list_for_user(GetUserOrdersDto {
                user_id: Uuid::new_v4(),
            })
            .await;
        assert!(nobody.is_empty());

        module.logout().await?;
        let report = module.list_mine().await.unwrap_err();
        assert_eq!(*report.current_context(), KernelError::NotAuthenticated);
        Ok(())
    }

    #[tokio::test]
    async fn listing_swallows_storage_failure() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(FailingStore::default());
        module.store().fail_on(Some(StorageKey::Orders)).await;

        let orders = module
            .list_for_store(GetStoreOrdersDto { store_id: 1 })
            .await;
        assert!(orders.is_empty());
        let progress = module.order_state().progress().snapshot().await;
        assert_eq!(progress.error, Some(KernelError::Internal.to_string()));
        assert!(!progress.loading);
        Ok(())
    }

    #[tokio::test]
    async fn storefront_walkthrough() -> error_stack::Result<(), KernelError> {
        let module = TestModule::in_memory();
        let identity = module.register(register_dto("reader@example.com")).await?;
        module
            .add_item(AddCartItemDto {
                book: book(1, 598),
                quantity: Quantity::parse(2).unwrap(),
            })
            .await?;
        module
            .add_item(AddCartItemDto {
                book: book(1, 598),
                quantity: Quantity::parse(1).unwrap(),
            })
            .await?;
        assert_eq!(
            module.cart_state().total_amount().await,
            Money::new(Decimal::new(1794, 1))
        );

        let order = module.create_order(create_order_dto()).await?;
        assert_eq!(*order.total_amount(), Money::new(Decimal::new(1794, 1)));
        assert_eq!(module.cart_state().total_item_count().await, 0);

        let id = *order.id().as_ref();
        assert_eq!(*module.pay(id).await?.status(), OrderStatus::Shipped);
        assert_eq!(
            *module.confirm_received(id).await?.status(),
            OrderStatus::Completed
        );

        let listed = module
            .list_for_user(GetUserOrdersDto {
                user_id: *identity.id().as_ref(),
            })
            .await;
        assert_eq!(listed.len(), 1);
        assert_eq!(*listed[0].status(), OrderStatus::Completed);
        Ok(())
    }
}
