use std::fmt::{Display, Formatter};

use crate::KernelError;

/// Names of the blobs the storefront keeps in key-value storage.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum StorageKey {
    Token,
    CurrentIdentity,
    Users,
    Carts,
    Orders,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Token => "token",
            StorageKey::CurrentIdentity => "user",
            StorageKey::Users => "users",
            StorageKey::Carts => "carts",
            StorageKey::Orders => "orders",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable get/set/remove of UTF-8 text blobs. No transactions: every call stands alone.
#[async_trait::async_trait]
pub trait KeyValueStore: 'static + Sync + Send {
    async fn read(&self, key: StorageKey) -> error_stack::Result<Option<String>, KernelError>;
    async fn write(&self, key: StorageKey, blob: String) -> error_stack::Result<(), KernelError>;
    async fn remove(&self, key: StorageKey) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnKeyValueStore: 'static + Sync + Send {
    type KeyValueStore: KeyValueStore;
    fn key_value_store(&self) -> &Self::KeyValueStore;
}
