//! Serving the API over TCP.

use {
	axum::Router,
	std::{future::Future, io, time::Duration},
	tokio::{net::TcpListener, sync::oneshot},
};

/// Serves `router` on `listener` until `shutdown_signal` resolves.
///
/// Once the signal fired, in-flight requests get `shutdown_timeout` to finish before the server
/// stops waiting for them.
#[tracing::instrument(skip_all, fields(addr = ?listener.local_addr().ok()))]
pub async fn run(
	listener: TcpListener,
	router: Router,
	shutdown_signal: impl Future<Output = ()> + Send + 'static,
	shutdown_timeout: Duration,
) -> io::Result<()>
{
	let (signal_tx, signal_rx) = oneshot::channel::<()>();
	let shutdown_signal = async move {
		shutdown_signal.await;
		tracing::info!("shutting down; waiting for in-flight requests");
		let _ = signal_tx.send(());
	};

	let serve = axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal)
		.into_future();

	tokio::pin!(serve);

	tokio::select! {
		result = &mut serve => return result,
		Ok(()) = signal_rx => {},
	}

	match tokio::time::timeout(shutdown_timeout, serve).await {
		Ok(result) => result,
		Err(_) => {
			tracing::warn!(timeout = ?shutdown_timeout, "requests did not finish in time");
			Ok(())
		},
	}
}
