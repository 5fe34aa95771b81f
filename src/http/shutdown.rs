//! Signal handling for graceful shutdown.

use axum_server::Handle;

/// How long to wait for in-flight requests before forcing exit.
const DRAIN_TIMEOUT_SECS: u64 = 30;

/// Setup graceful shutdown on SIGTERM and Ctrl+C.
///
/// On either signal the server stops accepting new connections, drains the
/// ones in flight, and exits. Container runtimes send SIGTERM on `docker
/// stop` and only escalate to SIGKILL after their own grace period.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, shutting down");
            }
        }

        handle.graceful_shutdown(Some(std::time::Duration::from_secs(DRAIN_TIMEOUT_SECS)));
        tracing::info!(
            "Graceful shutdown initiated, waiting up to {} seconds for connections to close",
            DRAIN_TIMEOUT_SECS
        );
    });
}
