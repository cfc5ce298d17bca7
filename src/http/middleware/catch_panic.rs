//! A middleware to catch panics and turn them into responses.
//!
//! See [`tower_http::catch_panic`] for more details.

use {
	crate::http::problem_details::{ProblemDetails, ProblemType},
	axum::{body::Body, response::IntoResponse},
	std::any::Any,
	tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic},
};

/// Creates a [`CatchPanicLayer`] that responds with a 500 problem details body.
pub(crate) fn layer() -> CatchPanicLayer<PanicResponse>
{
	CatchPanicLayer::custom(PanicResponse)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicResponse;

impl ResponseForPanic for PanicResponse
{
	type ResponseBody = Body;

	fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> http::Response<Body>
	{
		let panic_message = err
			.downcast_ref::<String>()
			.map(String::as_str)
			.or_else(|| err.downcast_ref::<&str>().copied());

		tracing::error!(target: "marks_api::http", ?panic_message, "http handler panicked");

		ProblemDetails::new(ProblemType::InternalServerError).into_response()
	}
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		axum::{Router, body, routing},
		http::{Request, StatusCode, header},
		serde_json::Value,
		tower::ServiceExt,
	};

	async fn panics() -> StatusCode
	{
		panic!("boom");
	}

	#[tokio::test]
	async fn panics_become_internal_server_errors() -> color_eyre::Result<()>
	{
		let response = Router::new()
			.route("/", routing::get(panics))
			.layer(layer())
			.oneshot(Request::get("/").body(Body::empty())?)
			.await?;

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(
			response.headers().get(header::CONTENT_TYPE).map(|value| value.as_bytes()),
			Some(&b"application/problem+json"[..]),
		);

		let body = body::to_bytes(response.into_body(), usize::MAX).await?;
		let problem = serde_json::from_slice::<Value>(&body)?;

		assert_eq!(problem["type"], "/problems/internal-server-error");
		assert_eq!(problem["status"], 500);

		Ok(())
	}
}
