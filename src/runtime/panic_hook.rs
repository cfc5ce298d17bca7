//! Logs panics through `tracing` before handing them to the previous hook.

use std::{backtrace::Backtrace, panic};

pub(crate) fn install()
{
	let old_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		tracing::error_span!(target: "marks_api::runtime", "panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();

			tracing::error!(target: "marks_api::runtime", "\n{info}\n---\nbacktrace:\n{backtrace}");
		});

		old_hook(info)
	}));
}
