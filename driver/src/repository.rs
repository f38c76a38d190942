use error_stack::ResultExt;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::KernelError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ConvertError;

pub use self::{cart::*, identity::*, order::*, session::*};

mod cart;
mod identity;
mod order;
mod session;

/// Whole-blob JSON access shared by the repositories. Every save rewrites the blob.
pub(crate) struct BlobInternal;

impl BlobInternal {
    pub(crate) async fn load<S, T>(store: &S, key: StorageKey) -> error_stack::Result<T, KernelError>
    where
        S: KeyValueStore,
        T: DeserializeOwned + Default + Send,
    {
        match store.read(key).await? {
            Some(blob) => serde_json::from_str(&blob)
                .convert_error()
                .attach_printable_lazy(|| format!("Malformed `{key}` blob")),
            None => Ok(T::default()),
        }
    }

    pub(crate) async fn save<S, T>(
        store: &S,
        key: StorageKey,
        value: &T,
    ) -> error_stack::Result<(), KernelError>
    where
        S: KeyValueStore,
        T: Serialize + Sync + ?Sized,
    {
        let blob = serde_json::to_string(value)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to encode `{key}` blob"))?;
        store.write(key, blob).await
    }
}
