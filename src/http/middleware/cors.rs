use {
	http::{HeaderName, HeaderValue},
	tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
};

/// Creates a [`CorsLayer`] that allows the given origins.
///
/// If there are no origins, any origin is allowed.
pub(crate) fn layer(allowed_origins: impl IntoIterator<Item = HeaderValue>) -> CorsLayer
{
	let allowed_origins = allowed_origins.into_iter().collect::<Vec<_>>();
	let allow_origin = if allowed_origins.is_empty() {
		AllowOrigin::any()
	} else {
		AllowOrigin::list(allowed_origins)
	};

	CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_headers(AllowHeaders::mirror_request())
		.allow_methods(AllowMethods::mirror_request())
		.expose_headers([HeaderName::from_static("x-request-id")])
}
