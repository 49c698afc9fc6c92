//! Listener lifecycle.

use crate::error::{Error, Result};
use crate::routes::{AppState, router};
use course_core::{CourseConfig, EventStore};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bind `host:port`.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .map_err(|source| Error::Bind {
            addr: format!("{host}:{port}"),
            source,
        })
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(config: &CourseConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(&config.webhook.host, config.webhook.port).await?;
    serve_listener(listener, config, shutdown).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(listener: TcpListener, config: &CourseConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let store = Arc::new(EventStore::new(
        config.events.file.clone(),
        config.events.max_events,
    ));
    let app = router(&config.webhook.path, AppState::new(store));

    let local = listener.local_addr().map_err(Error::Serve)?;
    tracing::info!(
        url = %format!("http://{local}{}", config.webhook.path),
        events_file = %config.events.file.display(),
        max_events = config.events.max_events,
        "Webhook server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Serve)?;

    tracing::info!("Webhook server stopped");
    Ok(())
}

/// Resolve on Ctrl-C.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
