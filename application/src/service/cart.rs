use tracing::debug;

use kernel::interface::query::{CartQuery, DependOnCartQuery};
use kernel::interface::storage::DependOnKeyValueStore;
use kernel::interface::update::{CartModifier, DependOnCartModifier};
use kernel::prelude::entity::{Cart, CartLineId, Identity};
use kernel::KernelError;

use crate::state::{DependOnCartState, DependOnSessionContext};
use crate::transfer::{AddCartItemDto, RemoveCartItemDto, UpdateCartQuantityDto};

/// The in-memory view when it belongs to `owner`, otherwise the stored cart.
pub(crate) async fn active_cart<T>(
    module: &T,
    owner: &Identity,
) -> error_stack::Result<Cart, KernelError>
where
    T: ?Sized + DependOnKeyValueStore + DependOnCartState + DependOnCartQuery,
{
    match module.cart_state().view().await {
        Some(cart) if cart.owner() == owner.id() => Ok(cart),
        _ => {
            module
                .cart_query()
                .find_by_owner(module.key_value_store(), owner.id())
                .await
        }
    }
}

/// Writes the cart through to storage, then publishes it as the current view.
async fn commit<T>(module: &T, cart: Cart) -> error_stack::Result<Cart, KernelError>
where
    T: ?Sized + DependOnKeyValueStore + DependOnCartState + DependOnCartModifier,
{
    module
        .cart_modifier()
        .save(module.key_value_store(), &cart)
        .await?;
    module.cart_state().replace(Some(cart.clone())).await;
    Ok(cart)
}

#[async_trait::async_trait]
pub trait AddCartItemService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnCartQuery
    + DependOnCartModifier
{
    async fn add_item(&self, dto: AddCartItemDto) -> error_stack::Result<Cart, KernelError> {
        let operation = async move {
            let identity = self.session_context().require().await?;
            let mut cart = active_cart(self, &identity).await?;
            let line = cart.add(&dto.book, dto.quantity);
            debug!("Added book {} to line {}", dto.book.id().as_ref(), line.as_ref());
            commit(self, cart).await
        };
        self.cart_state().progress().track(operation).await
    }
}

impl<T> AddCartItemService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnCartQuery
        + DependOnCartModifier
{
}

#[async_trait::async_trait]
pub trait UpdateCartQuantityService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnCartQuery
    + DependOnCartModifier
{
    /// Unknown lines leave the cart as it is.
    async fn update_quantity(
        &self,
        dto: UpdateCartQuantityDto,
    ) -> error_stack::Result<Cart, KernelError> {
        let operation = async move {
            let identity = self.session_context().require().await?;
            let mut cart = active_cart(self, &identity).await?;
            if !cart.update_quantity(&CartLineId::new(dto.line_id), dto.quantity) {
                debug!("Line {} is not in the cart", dto.line_id);
            }
            commit(self, cart).await
        };
        self.cart_state().progress().track(operation).await
    }
}

impl<T> UpdateCartQuantityService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnCartQuery
        + DependOnCartModifier
{
}

#[async_trait::async_trait]
pub trait RemoveCartItemService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnCartQuery
    + DependOnCartModifier
{
    async fn remove_item(&self, dto: RemoveCartItemDto) -> error_stack::Result<Cart, KernelError> {
        let operation = async move {
            let identity = self.session_context().require().await?;
            let mut cart = active_cart(self, &identity).await?;
            cart.remove(&CartLineId::new(dto.line_id));
            commit(self, cart).await
        };
        self.cart_state().progress().track(operation).await
    }
}

impl<T> RemoveCartItemService for T where
    T: DependOnKeyValueStore
        + DependOnSessionContext
        + DependOnCartState
        + DependOnCartQuery
        + DependOnCartModifier
{
}

#[async_trait::async_trait]
pub trait ClearCartService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnCartModifier
{
    async fn clear_cart(&self) -> error_stack::Result<Cart, KernelError> {
        let operation = async move {
            let identity = self.session_context().require().await?;
            commit(self, Cart::empty(*identity.id())).await
        };
        self.cart_state().progress().track(operation).await
    }
}

impl<T> ClearCartService for T where
    T: DependOnKeyValueStore + DependOnSessionContext + DependOnCartState + DependOnCartModifier
{
}

#[async_trait::async_trait]
pub trait FetchCartService:
    'static
    + Sync
    + Send
    + DependOnKeyValueStore
    + DependOnSessionContext
    + DependOnCartState
    + DependOnCartQuery
{
    /// Reloads the view from storage. Without a session the view is emptied.
    async fn fetch_cart(&self) -> error_stack::Result<Option<Cart>, KernelError> {
        let operation = async move {
            let Some(identity) = self.session_context().current().await else {
                self.cart_state().replace(None).await;
                return Ok(None);
            };
            let cart = self
                .cart_query()
                .find_by_owner(self.key_value_store(), identity.id())
                .await?;
            self.cart_state().replace(Some(cart.clone())).await;
            Ok(Some(cart))
        };
        self.cart_state().progress().track(operation).await
    }
}

impl<T> FetchCartService for T where
    T: DependOnKeyValueStore + DependOnSessionContext + DependOnCartState + DependOnCartQuery
{
}
