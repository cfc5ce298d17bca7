//! OS signals the server reacts to.

use {std::error::Error, tokio::signal::ctrl_c};

/// Resolves once the process has been asked to shut down (SIGINT or SIGTERM).
pub async fn shutdown()
{
	tokio::select! {
		ctrl_c_result = ctrl_c() => match ctrl_c_result {
			Ok(()) => tracing::debug!("received SIGINT"),
			Err(err) => {
				tracing::error!(error = &err as &dyn Error, "failed listening for SIGINT");
			},
		},

		() = terminate() => {},
	}
}

#[cfg(unix)]
async fn terminate()
{
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => match signal.recv().await {
			Some(()) => tracing::debug!("received SIGTERM"),
			None => tracing::warn!("cannot receive more SIGTERM signals"),
		},
		Err(err) => {
			tracing::error!(error = &err as &dyn Error, "failed listening for SIGTERM");
		},
	}
}

#[cfg(not(unix))]
async fn terminate()
{
	std::future::pending().await
}
