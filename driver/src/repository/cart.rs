use std::collections::BTreeMap;

use kernel::interface::query::CartQuery;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::interface::update::CartModifier;
use kernel::prelude::entity::{Cart, CartLine, IdentityId};
use kernel::KernelError;

use crate::repository::BlobInternal;

/// Every cart lives in one `carts` object mapping owner id to its lines.
pub struct StoredCartRepository;

type CartBlob = BTreeMap<String, Vec<CartLine>>;

fn owner_key(owner: &IdentityId) -> String {
    owner.as_ref().to_string()
}

#[async_trait::async_trait]
impl CartQuery for StoredCartRepository {
    async fn find_by_owner<S: KeyValueStore>(
        &self,
        store: &S,
        owner: &IdentityId,
    ) -> error_stack::Result<Cart, KernelError> {
        let mut carts: CartBlob = BlobInternal::load(store, StorageKey::Carts).await?;
        let lines = carts.remove(&owner_key(owner)).unwrap_or_default();
        Ok(Cart::new(*owner, lines))
    }
}

#[async_trait::async_trait]
impl CartModifier for StoredCartRepository {
    #[tracing::instrument(skip_all, fields(owner = %cart.owner().as_ref(), lines = cart.lines().len()))]
    async fn save<S: KeyValueStore>(
        &self,
        store: &S,
        cart: &Cart,
    ) -> error_stack::Result<(), KernelError> {
        let mut carts: CartBlob = BlobInternal::load(store, StorageKey::Carts).await?;
        carts.insert(owner_key(cart.owner()), cart.lines().clone());
        BlobInternal::save(store, StorageKey::Carts, &carts).await
    }
}
