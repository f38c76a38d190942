use crate::env;
use crate::error::ConvertError;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Connection, Pool, Runtime};
use error_stack::ResultExt;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::KernelError;

const REDIS_URL: &str = "REDIS_URL";
const KEY_PREFIX: &str = "storefront";

#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(REDIS_URL).convert_error()?;
        Self::from_url(url)
    }

    pub fn from_url(url: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let cfg = Config::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .convert_error()
            .attach_printable("Failed to create redis pool")?;
        Ok(Self { pool })
    }

    async fn connection(&self) -> error_stack::Result<Connection, KernelError> {
        self.pool.get().await.convert_error()
    }
}

fn namespaced(key: StorageKey) -> String {
    format!("{KEY_PREFIX}:{key}")
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    #[tracing::instrument(skip(self))]
    async fn read(&self, key: StorageKey) -> error_stack::Result<Option<String>, KernelError> {
        let mut con = self.connection().await?;
        let blob: Option<String> = con
            .get(namespaced(key))
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read `{key}`"))?;
        Ok(blob)
    }

    #[tracing::instrument(skip(self, blob))]
    async fn write(&self, key: StorageKey, blob: String) -> error_stack::Result<(), KernelError> {
        let mut con = self.connection().await?;
        con.set::<_, _, ()>(namespaced(key), blob)
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to write `{key}`"))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: StorageKey) -> error_stack::Result<(), KernelError> {
        let mut con = self.connection().await?;
        con.del::<_, ()>(namespaced(key))
            .await
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to remove `{key}`"))?;
        Ok(())
    }
}
