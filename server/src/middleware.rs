use application::service::LogoutService;
use application::state::DependOnSessionContext;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::SessionRejected;
use crate::handler::AppModule;

/// Ends the in-memory session once storage stops accepting it. The stored
/// token and identity record are already gone by then.
pub async fn expire_rejected_session(
    State(handler): State<AppModule>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.extensions().get::<SessionRejected>().is_some()
        && handler.session_context().is_logged_in().await
    {
        tracing::info!("Session rejected by storage, logging out");
        if let Err(report) = handler.logout().await {
            tracing::warn!("Failed to drop rejected session: {report:?}");
        }
    }
    response
}
