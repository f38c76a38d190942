use deadpool_redis::redis::RedisError;
use deadpool_redis::{CreatePoolError, PoolError};
use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Redis(#[from] RedisError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    CreatePool(#[from] CreatePoolError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Env(#[from] dotenvy::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl DriverError {
    fn kernel_context(&self) -> KernelError {
        match self {
            DriverError::Pool(PoolError::Timeout(_)) => KernelError::Timeout,
            DriverError::Http(error) if error.is_timeout() => KernelError::Timeout,
            _ => KernelError::Internal,
        }
    }
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, E> ConvertError for Result<T, E>
where
    E: Into<DriverError>,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let error: DriverError = error.into();
            let context = error.kernel_context();
            Report::new(error).change_context(context)
        })
    }
}
