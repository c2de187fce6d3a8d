use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use crate::error::{Result, ServerError};
use crate::handlers;

// no routes and no state: the fallback catches every method on every path
pub fn app() -> Router {

    Router::new().fallback(handlers::deny)

}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {

    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })

}

/// Serves the deny router until `shutdown` resolves.
///
/// The listener is dropped before this returns, so the port can be bound
/// again as soon as the future completes.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())

}

/// Resolves on Ctrl-C, or SIGTERM on unix.
///
/// Handlers are installed when this is called, not when the future is first
/// polled, so an interrupt that arrives during startup still stops cleanly.
#[cfg(unix)]
pub fn shutdown_signal() -> impl Future<Output = ()> + Send + 'static {
    use tokio::signal::unix::{signal, SignalKind};

    let interrupt = signal(SignalKind::interrupt());
    let terminate = signal(SignalKind::terminate());

    async move {
        let (mut interrupt, mut terminate) = match (interrupt, terminate) {
            (Ok(interrupt), Ok(terminate)) => (interrupt, terminate),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("failed to install signal handlers: {}", e);
                return std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = interrupt.recv() => tracing::info!("received interrupt"),
            _ = terminate.recv() => tracing::info!("received SIGTERM"),
        }

        tracing::info!("stopping block service");
    }
}

#[cfg(not(unix))]
pub fn shutdown_signal() -> impl Future<Output = ()> + Send + 'static {
    async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            return std::future::pending::<()>().await;
        }

        tracing::info!("received interrupt");
        tracing::info!("stopping block service");
    }
}
