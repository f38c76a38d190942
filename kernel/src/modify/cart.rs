use crate::entity::Cart;
use crate::storage::KeyValueStore;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CartModifier: 'static + Sync + Send {
    /// Replaces everything stored for the cart's owner.
    async fn save<S: KeyValueStore>(&self, store: &S, cart: &Cart)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCartModifier: 'static + Sync + Send {
    type CartModifier: CartModifier;
    fn cart_modifier(&self) -> &Self::CartModifier;
}
