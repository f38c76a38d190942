use error_stack::Report;
use kernel::interface::storage::{KeyValueStore, StorageKey};
use kernel::KernelError;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::env;
use crate::error::ConvertError;

const STOREFRONT_API_URL: &str = "STOREFRONT_API_URL";

/// JSON request surface of the storefront backend.
///
/// The bearer token is read from `local` storage on every request. A `401`
/// answer wipes the stored token and identity record and surfaces as
/// [`KernelError::NotAuthenticated`], which callers treat as "go to login".
pub struct RemoteApi<S> {
    client: Client,
    base_url: String,
    local: S,
}

impl<S: KeyValueStore> RemoteApi<S> {
    pub fn new(base_url: impl Into<String>, local: S) -> error_stack::Result<Self, KernelError> {
        let client = Client::builder().build().convert_error()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            local,
        })
    }

    pub fn from_env(local: S) -> error_stack::Result<Self, KernelError> {
        let url = env(STOREFRONT_API_URL).convert_error()?;
        Self::new(url, local)
    }

    pub fn local(&self) -> &S {
        &self.local
    }

    pub async fn get<R>(&self, path: &str) -> error_stack::Result<R, KernelError>
    where
        R: DeserializeOwned,
    {
        self.send::<(), R>(Method::GET, path, None).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> error_stack::Result<R, KernelError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> error_stack::Result<R, KernelError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<R>(&self, path: &str) -> error_stack::Result<R, KernelError>
    where
        R: DeserializeOwned,
    {
        self.send::<(), R>(Method::DELETE, path, None).await
    }

    #[tracing::instrument(skip(self, body))]
    async fn send<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> error_stack::Result<R, KernelError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let mut request = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        if let Some(token) = self.local.read(StorageKey::Token).await? {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.convert_error()?;
        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.expire_session().await;
                return Err(Report::new(KernelError::NotAuthenticated)
                    .attach_printable(format!("`{path}` rejected the session")));
            }
            StatusCode::NOT_FOUND => {
                return Err(Report::new(KernelError::NotFound)
                    .attach_printable(format!("`{path}` does not exist")));
            }
            status if !status.is_success() => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("`{path}` answered {status}")));
            }
            _ => {}
        }

        let bytes = response.bytes().await.convert_error()?;
        // Empty bodies decode as `null` so `()` works as a response type.
        let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(bytes).convert_error()
    }

    async fn expire_session(&self) {
        for key in [StorageKey::Token, StorageKey::CurrentIdentity] {
            if let Err(report) = self.local.remove(key).await {
                warn!("Failed to drop `{key}` after unauthorized answer: {report:?}");
            }
        }
    }
}
