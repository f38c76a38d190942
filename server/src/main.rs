use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::middleware::expire_rejected_session;
use crate::route::{CartRouter, OrderRouter, SessionRouter};
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod handler;
mod middleware;
mod request;
mod response;
mod route;

const STOREFRONT_BIND: &str = "STOREFRONT_BIND";

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,application=debug,server=debug,tower_http=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new().await?;
    tracing::info!("Using {} storage", app.storage().name());

    let router = axum::Router::new()
        .route_session()
        .route_cart()
        .route_order()
        .layer(axum::middleware::from_fn_with_state(
            app.clone(),
            expire_rejected_session,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app);

    let bind = std::env::var(STOREFRONT_BIND).unwrap_or_else(|_| "0.0.0.0:8080".into());
    let bind: SocketAddr = bind.parse().map_err(|_| {
        Report::new(KernelError::Internal)
            .attach_printable(format!("`{STOREFRONT_BIND}` is not a socket address: {bind}"))
    })?;
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("Listening on {bind}");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
