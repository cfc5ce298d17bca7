use {
	crate::http::problem_details::{ProblemDetails, ProblemType},
	axum::{
		extract::path::ErrorKind,
		response::{IntoResponse, Response},
	},
	derive_more::{Debug, Display},
	std::{any::type_name, error::Error, marker::PhantomData},
};

#[derive(Debug, Display)]
#[display("failed to extract path parameter of type `{}`: {}", type_name::<T>(), inner)]
pub(crate) struct PathRejection<T>
{
	inner: axum::extract::rejection::PathRejection,

	#[debug("{}", type_name::<T>())]
	ty: PhantomData<T>,
}

impl<T> From<axum::extract::rejection::PathRejection> for PathRejection<T>
{
	fn from(rejection: axum::extract::rejection::PathRejection) -> Self
	{
		Self { inner: rejection, ty: PhantomData }
	}
}

impl<T> IntoResponse for PathRejection<T>
{
	fn into_response(self) -> Response
	{
		let error = match self.inner {
			axum::extract::rejection::PathRejection::FailedToDeserializePathParams(error) => error,
			rejection => {
				tracing::error!(
					error = &rejection as &dyn Error,
					"type" = type_name::<T>(),
					"path parameters are missing from the route",
				);

				return ProblemDetails::new(ProblemType::InternalServerError).into_response();
			},
		};

		let detail = match error.kind() {
			ErrorKind::ParseErrorAtKey { key, value, expected_type } => {
				format!(
					"failed to parse {key:?} parameter: {value:?} is not a valid `{expected_type}`"
				)
			},
			ErrorKind::ParseErrorAtIndex { index, value, expected_type } => {
				format!(
					"failed to parse parameter #{index}: {value:?} is not a valid `{expected_type}`"
				)
			},
			ErrorKind::ParseError { value, expected_type } => {
				format!("failed to parse parameter: {value:?} is not a valid `{expected_type}`")
			},
			ErrorKind::InvalidUtf8InPathParam { key } => {
				format!("failed to parse parameter {key:?}: invalid UTF-8")
			},
			ErrorKind::DeserializeError { key, message, .. } => {
				format!("failed to parse parameter {key:?}: {message}")
			},
			kind => {
				tracing::error!(
					error = &error as &dyn Error,
					?kind,
					"type" = type_name::<T>(),
					"path parameters do not fit the route",
				);

				return ProblemDetails::new(ProblemType::InternalServerError).into_response();
			},
		};

		let mut problem_details = ProblemDetails::new(ProblemType::InvalidPathParameters);
		problem_details.set_detail(detail);
		problem_details.into_response()
	}
}
