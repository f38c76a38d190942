use std::ops::Deref;
use std::sync::Arc;

use application::service::RestoreSessionService;
use application::state::{
    CartState, DependOnCartState, DependOnOrderState, DependOnSessionContext, OrderState,
    SessionContext,
};
use driver::database::StorageBackend;
use driver::repository::{
    StoredCartRepository, StoredIdentityRepository, StoredOrderRepository, StoredSessionRepository,
};
use kernel::interface::query::{
    DependOnCartQuery, DependOnIdentityQuery, DependOnOrderQuery, DependOnSessionQuery,
};
use kernel::interface::storage::DependOnKeyValueStore;
use kernel::interface::update::{
    DependOnCartModifier, DependOnIdentityModifier, DependOnOrderModifier, DependOnSessionModifier,
};
use kernel::KernelError;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    storage: StorageBackend,
    session: SessionContext,
    cart: CartState,
    orders: OrderState,
}

impl Handler {
    /// Picks the storage backend and restores a persisted session, if any.
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let storage = StorageBackend::from_env()?;
        let handler = Self {
            storage,
            session: SessionContext::new(),
            cart: CartState::new(),
            orders: OrderState::new(),
        };
        if let Some(identity) = handler.restore_session().await? {
            tracing::info!("Restored session of {}", identity.email().as_ref());
        }
        Ok(handler)
    }
}

#[cfg(test)]
impl AppModule {
    pub(crate) fn in_memory() -> Self {
        Self(Arc::new(Handler {
            storage: StorageBackend::Memory(driver::database::InMemoryStore::new()),
            session: SessionContext::new(),
            cart: CartState::new(),
            orders: OrderState::new(),
        }))
    }
}

impl DependOnKeyValueStore for Handler {
    type KeyValueStore = StorageBackend;
    fn key_value_store(&self) -> &Self::KeyValueStore {
        &self.storage
    }
}

impl DependOnSessionContext for Handler {
    fn session_context(&self) -> &SessionContext {
        &self.session
    }
}

impl DependOnCartState for Handler {
    fn cart_state(&self) -> &CartState {
        &self.cart
    }
}

impl DependOnOrderState for Handler {
    fn order_state(&self) -> &OrderState {
        &self.orders
    }
}

impl DependOnIdentityQuery for Handler {
    type IdentityQuery = StoredIdentityRepository;
    fn identity_query(&self) -> &Self::IdentityQuery {
        &StoredIdentityRepository
    }
}

impl DependOnIdentityModifier for Handler {
    type IdentityModifier = StoredIdentityRepository;
    fn identity_modifier(&self) -> &Self::IdentityModifier {
        &StoredIdentityRepository
    }
}

impl DependOnSessionQuery for Handler {
    type SessionQuery = StoredSessionRepository;
    fn session_query(&self) -> &Self::SessionQuery {
        &StoredSessionRepository
    }
}

impl DependOnSessionModifier for Handler {
    type SessionModifier = StoredSessionRepository;
    fn session_modifier(&self) -> &Self::SessionModifier {
        &StoredSessionRepository
    }
}

impl DependOnCartQuery for Handler {
    type CartQuery = StoredCartRepository;
    fn cart_query(&self) -> &Self::CartQuery {
        &StoredCartRepository
    }
}

impl DependOnCartModifier for Handler {
    type CartModifier = StoredCartRepository;
    fn cart_modifier(&self) -> &Self::CartModifier {
        &StoredCartRepository
    }
}

impl DependOnOrderQuery for Handler {
    type OrderQuery = StoredOrderRepository;
    fn order_query(&self) -> &Self::OrderQuery {
        &StoredOrderRepository
    }
}

impl DependOnOrderModifier for Handler {
    type OrderModifier = StoredOrderRepository;
    fn order_modifier(&self) -> &Self::OrderModifier {
        &StoredOrderRepository
    }
}
