//! Signal handling.
//!
//! SIGTERM (sent by the orchestrator on task stop) and SIGINT both trigger a
//! graceful shutdown: stop accepting, drain open connections for up to
//! [`SHUTDOWN_GRACE_PERIOD_SECS`], then let `serve` return so the process
//! exits with status 0.

use std::time::Duration;

use axum_server::Handle;

use crate::config::SHUTDOWN_GRACE_PERIOD_SECS;

/// Trigger graceful shutdown of `handle` on SIGTERM or SIGINT.
///
/// Signal streams are registered before returning, so a signal that arrives
/// once the listener is bound is never missed. Each signal is registered on
/// its own: one that fails is logged and never fires, while the other still
/// triggers the drain.
#[cfg(unix)]
pub fn setup_shutdown_handler(handle: Handle) {
    use tokio::signal::unix::SignalKind;

    let sigint = register(SignalKind::interrupt(), "SIGINT");
    let sigterm = register(SignalKind::terminate(), "SIGTERM");

    tokio::spawn(async move {
        let signal = tokio::select! {
            _ = recv_or_pending(sigint) => "SIGINT",
            _ = recv_or_pending(sigterm) => "SIGTERM",
        };
        drain(&handle, signal);
    });
}

#[cfg(unix)]
fn register(
    kind: tokio::signal::unix::SignalKind,
    name: &'static str,
) -> Option<tokio::signal::unix::Signal> {
    match tokio::signal::unix::signal(kind) {
        Ok(stream) => Some(stream),
        Err(e) => {
            tracing::error!(error = %e, signal = name, "Failed to install signal handler");
            None
        }
    }
}

/// Wait for the next delivery, or forever if the stream was never installed.
#[cfg(unix)]
async fn recv_or_pending(stream: Option<tokio::signal::unix::Signal>) {
    match stream {
        Some(mut stream) => {
            stream.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Trigger graceful shutdown of `handle` on Ctrl+C.
#[cfg(not(unix))]
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => drain(&handle, "Ctrl+C"),
            Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
        }
    });
}

fn drain(handle: &Handle, signal: &'static str) {
    tracing::info!(
        signal,
        grace_period_secs = SHUTDOWN_GRACE_PERIOD_SECS,
        "Received shutdown signal, draining connections"
    );
    handle.graceful_shutdown(Some(Duration::from_secs(SHUTDOWN_GRACE_PERIOD_SECS)));
}
