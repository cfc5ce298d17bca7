pub(crate) use self::rejection::PathRejection;
use {
	axum::{extract::FromRequestParts, http::request},
	futures_util::TryFutureExt,
	serde::de::DeserializeOwned,
	std::fmt,
	tracing::instrument,
};

mod rejection;

/// Like [`axum::extract::Path`], but rejects with problem details.
#[derive(Debug)]
pub(crate) struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
	T: DeserializeOwned + fmt::Debug + Send + 'static,
	S: Send + Sync,
{
	type Rejection = PathRejection<T>;

	#[instrument(level = "debug", skip_all, ret(level = "debug"), err(level = "debug"))]
	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection>
	{
		<axum::extract::Path<T> as FromRequestParts<S>>::from_request_parts(parts, state)
			.map_ok(|axum::extract::Path(value)| Self(value))
			.map_err(PathRejection::<T>::from)
			.await
	}
}
