use {
	axum::body::Body,
	http::{Request, Response},
	std::time::Duration,
	tower_http::{
		classify::ServerErrorsFailureClass,
		request_id::RequestId,
		trace::{
			DefaultOnBodyChunk,
			DefaultOnEos,
			HttpMakeClassifier,
			MakeSpan,
			OnFailure,
			OnRequest,
			OnResponse,
			TraceLayer,
		},
	},
	tracing::field,
};

/// Creates a [`TraceLayer`] that emits a `request` span and start / finish events for every
/// request.
///
/// Request and response headers are only recorded if `include_headers` is set.
pub(crate) fn layer(
	include_headers: bool,
) -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<Body> + Clone,
	impl OnRequest<Body> + Clone,
	impl OnResponse<Body> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span)
		.on_request(move |req: &Request<Body>, span: &tracing::Span| {
			on_request(req, span, include_headers);
		})
		.on_response(move |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
			on_response(res, latency, span, include_headers);
		})
		.on_failure(on_failure)
}

fn make_span(_: &Request<Body>) -> tracing::Span
{
	tracing::info_span!(
		target: "marks_api::http",
		"request",
		req.id = field::Empty,
		req.method = field::Empty,
		req.uri = field::Empty,
		req.version = field::Empty,
		req.headers = field::Empty,
		res.status = field::Empty,
		res.headers = field::Empty,
	)
}

fn on_request(req: &Request<Body>, span: &tracing::Span, include_headers: bool)
{
	if let Some(request_id) = req.extensions().get::<RequestId>() {
		span.record("req.id", field::debug(request_id.header_value()));
	} else {
		tracing::warn!(target: "marks_api::http", "no request ID in request extensions");
	}

	span.record("req.method", field::debug(req.method()));
	span.record("req.uri", field::display(req.uri()));
	span.record("req.version", field::debug(req.version()));

	if include_headers {
		span.record("req.headers", field::debug(req.headers()));
	}

	tracing::info!(target: "marks_api::http", "starting to process request");
}

fn on_response(res: &Response<Body>, latency: Duration, span: &tracing::Span, include_headers: bool)
{
	span.record("res.status", res.status().as_u16());

	if include_headers {
		span.record("res.headers", field::debug(res.headers()));
	}

	tracing::info!(target: "marks_api::http", ?latency, "finished processing request");
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span)
{
	match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::debug!(
				target: "marks_api::http",
				status = status.as_u16(),
				?latency,
				"failed to handle request",
			);
		},
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(
				target: "marks_api::http",
				%error,
				?latency,
				"failed to handle request",
			);
		},
	}
}
