//! The tokio runtime the server runs on.

use {
	serde::Deserialize,
	std::{io, num::NonZero},
	tokio::runtime::{Builder, Runtime},
};

pub(crate) mod panic_hook;

/// The `[runtime]` section of the configuration file.
///
/// Sizes that are left unset are chosen by tokio.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct RuntimeConfig
{
	pub worker_threads: Option<NonZero<usize>>,
	pub max_blocking_threads: Option<NonZero<usize>>,
}

impl RuntimeConfig
{
	/// Builds a multi-threaded runtime with every driver enabled.
	pub(crate) fn build(&self) -> io::Result<Runtime>
	{
		let mut builder = Builder::new_multi_thread();
		builder.enable_all().thread_name("marks-api-worker");

		if let Some(worker_threads) = self.worker_threads {
			builder.worker_threads(worker_threads.get());
		}

		if let Some(max_blocking_threads) = self.max_blocking_threads {
			builder.max_blocking_threads(max_blocking_threads.get());
		}

		builder.build()
	}
}
