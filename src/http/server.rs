//! Listener binding and serving.

use std::io;
use std::net::{SocketAddr, TcpListener};

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, DEFAULT_HOST, FALLBACK_HOST};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the listening socket.
///
/// Fails immediately if the address is taken or not permitted. Binding the
/// dual-stack wildcard falls back to `0.0.0.0` on hosts without IPv6.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    match bind_exact(addr) {
        Err(ServerError::Bind { source, .. })
            if addr.ip() == DEFAULT_HOST && is_ipv6_unavailable(&source) =>
        {
            let fallback = SocketAddr::new(FALLBACK_HOST, addr.port());
            tracing::warn!(%addr, %fallback, error = %source, "IPv6 unavailable, listening on IPv4 only");
            bind_exact(fallback)
        }
        result => result,
    }
}

fn bind_exact(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let bind_error = |source: io::Error| ServerError::Bind { addr, source };

    let listener = TcpListener::bind(addr).map_err(bind_error)?;
    listener.set_nonblocking(true).map_err(bind_error)?;
    Ok(listener)
}

/// Errors that are not about the port itself and would not recur on IPv4
fn is_ipv6_unavailable(error: &io::Error) -> bool {
    !matches!(
        error.kind(),
        io::ErrorKind::AddrInUse | io::ErrorKind::PermissionDenied
    )
}

/// Serve `app` on an already bound listener until `handle` shuts it down.
pub async fn serve(listener: TcpListener, app: Router, handle: Handle) -> Result<(), ServerError> {
    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

/// Bind, announce, and serve until a shutdown signal arrives.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(config.http.socket_addr())?;
    let addr = listener.local_addr().unwrap_or_else(|_| config.http.socket_addr());

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Server running on port {}", config.http.port);

    serve(listener, app, handle).await?;

    tracing::info!("Server stopped");
    Ok(())
}
