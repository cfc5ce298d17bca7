//! A JSON extractor / response type that reports errors as problem details.

pub(crate) use self::rejection::JsonRejection;
use {
	axum::{
		extract::{FromRequest, Request},
		response::{IntoResponse, Response},
	},
	bytes::Bytes,
	headers::HeaderMapExt,
	mime::Mime,
	serde::{Serialize, de::DeserializeOwned},
	std::{error::Error, fmt},
	tracing::instrument,
};

mod rejection;

#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		let body = match serde_json::to_vec(&self.0) {
			Ok(body) => body,
			Err(error) => {
				tracing::error!(error = &error as &dyn Error, "failed to serialize response body");
				return http::StatusCode::INTERNAL_SERVER_ERROR.into_response();
			},
		};

		let mut response = Response::new(body.into());
		response.headers_mut().typed_insert(headers::ContentType::json());
		response
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: DeserializeOwned + fmt::Debug,
	S: Send + Sync,
{
	type Rejection = JsonRejection;

	#[instrument(level = "debug", skip_all, ret(level = "debug"), err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::content_type(req.headers()));
		}

		let body = Bytes::from_request(req, state).await?;

		serde_json::from_slice(&body[..])
			.map(Self)
			.map_err(JsonRejection::Deserialize)
	}
}

#[instrument(level = "trace", ret(level = "trace"))]
fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		tracing::debug!("request headers contain a `Content-Type` header, but it's not UTF-8");
		return false;
	};

	let Ok(mime) = content_type.parse::<Mime>() else {
		tracing::debug!(content_type, "`Content-Type` header is not a valid mime type");
		return false;
	};

	mime.type_() == mime::APPLICATION
		&& (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn headers(content_type: &'static str) -> http::HeaderMap
	{
		let mut headers = http::HeaderMap::new();
		headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static(content_type));
		headers
	}

	#[test]
	fn json_content_types()
	{
		assert!(has_json_content_type(&headers("application/json")));
		assert!(has_json_content_type(&headers("application/json; charset=utf-8")));
		assert!(has_json_content_type(&headers("application/merge-patch+json")));
	}

	#[test]
	fn other_content_types()
	{
		assert!(!has_json_content_type(&http::HeaderMap::new()));
		assert!(!has_json_content_type(&headers("text/plain")));
		assert!(!has_json_content_type(&headers("application/x-www-form-urlencoded")));
	}
}
