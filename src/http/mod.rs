//! The HTTP surface of the API.
//!
//! [`router()`] wires every handler to its route and wraps the result in the middleware stack;
//! the caller picks the [`StudentStore`] implementation.

use {
	crate::students::StudentStore,
	axum::routing::{self, Router},
	bon::builder,
	http::HeaderValue,
	std::sync::Arc,
};

pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;

mod extract;
mod json;
mod problem_details;
mod response;

/// Builds the API's [`Router`] on top of `store`.
///
/// ```ignore
/// let router = marks_api::http::router(MemoryStudentStore::new())
///     .include_http_headers(true)
///     .build();
/// ```
#[builder(finish_fn = build)]
pub fn router<S>(
	#[builder(start_fn)] store: S,

	/// Origins allowed to make cross-origin requests; any origin if empty.
	#[builder(default)]
	allowed_origins: Vec<HeaderValue>,

	/// Whether request/response headers are recorded by the trace middleware.
	#[builder(default)]
	include_http_headers: bool,
) -> Router
where
	S: StudentStore,
{
	let (set_request_id, propagate_request_id) = middleware::request_id::layers();

	Router::new()
		.route("/", routing::get(handlers::health))
		.route(
			"/students",
			routing::get(handlers::get_students::<S>).post(handlers::create_student::<S>),
		)
		.route(
			"/students/{student_id}",
			routing::get(handlers::get_student::<S>)
				.put(handlers::update_student::<S>)
				.delete(handlers::delete_student::<S>),
		)
		.route("/stats", routing::get(handlers::get_stats::<S>))
		.route("/problems", routing::get(handlers::problems_json))
		.route("/docs/openapi.json", routing::get(handlers::openapi_json))
		.with_state(Arc::new(store))
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer(include_http_headers))
		.layer(propagate_request_id)
		.layer(set_request_id)
		.layer(middleware::cors::layer(allowed_origins))
}
