use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProblemType
{
	InvalidPathParameters,
	MissingHeader,
	DeserializeRequestBody,
	InvalidField,
	StudentNotFound,
	StorageUnavailable,
	InternalServerError,
}

/// Human-readable documentation for a [`ProblemType`], served at `GET /problems`.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct ProblemDescription
{
	#[serde(rename = "type")]
	uri: &'static str,
	status: u16,
	title: &'static str,
	description: &'static str,
}

impl ProblemType
{
	pub(crate) const ALL: &[Self] = &[
		Self::InvalidPathParameters,
		Self::MissingHeader,
		Self::DeserializeRequestBody,
		Self::InvalidField,
		Self::StudentNotFound,
		Self::StorageUnavailable,
		Self::InternalServerError,
	];

	pub(crate) fn uri(self) -> &'static str
	{
		match self {
			Self::InvalidPathParameters => "/problems/invalid-path-parameters",
			Self::MissingHeader => "/problems/missing-header",
			Self::DeserializeRequestBody => "/problems/deserialize-request-body",
			Self::InvalidField => "/problems/invalid-field",
			Self::StudentNotFound => "/problems/student-not-found",
			Self::StorageUnavailable => "/problems/storage-unavailable",
			Self::InternalServerError => "/problems/internal-server-error",
		}
	}

	pub(crate) fn status(self) -> http::StatusCode
	{
		match self {
			Self::InvalidPathParameters
			| Self::MissingHeader
			| Self::DeserializeRequestBody
			| Self::InvalidField => http::StatusCode::BAD_REQUEST,
			Self::StudentNotFound => http::StatusCode::NOT_FOUND,
			Self::StorageUnavailable => http::StatusCode::SERVICE_UNAVAILABLE,
			Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	pub(crate) fn title(self) -> &'static str
	{
		match self {
			Self::InvalidPathParameters => "invalid path parameter(s)",
			Self::MissingHeader => "missing required header",
			Self::DeserializeRequestBody => "failed to deserialize request body",
			Self::InvalidField => "invalid field value",
			Self::StudentNotFound => "student not found",
			Self::StorageUnavailable => "storage is currently unavailable",
			Self::InternalServerError => "something unexpected happened",
		}
	}

	pub(crate) fn description(self) -> ProblemDescription
	{
		let description = match self {
			Self::InvalidPathParameters => {
				"You supplied path parameters that could not be parsed correctly. Student IDs \
				 are integers. The `detail` field of the response body should indicate what you \
				 did wrong."
			},
			Self::MissingHeader => {
				"You did not provide a required header. Endpoints that accept a request body \
				 require `Content-Type: application/json`."
			},
			Self::DeserializeRequestBody => {
				"You provided a request body that is not a valid JSON object. The `detail` field \
				 of the response body should indicate what you did wrong."
			},
			Self::InvalidField => {
				"One of the fields in your request body has an invalid value. The `field` member \
				 names it. `name` and `course` must be non-empty strings; `mark` must be an \
				 integer between 0 and 100."
			},
			Self::StudentNotFound => {
				"The student you tried to access does not exist. It may have been deleted. The \
				 `student_id` member contains the ID you asked for."
			},
			Self::StorageUnavailable => {
				"The API could not reach its database. This is usually temporary; try again in \
				 a moment."
			},
			Self::InternalServerError => {
				"Something went wrong on our side. Please report this incident, including the \
				 `x-request-id` response header."
			},
		};

		ProblemDescription {
			uri: self.uri(),
			status: self.status().as_u16(),
			title: self.title(),
			description,
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn uris_are_unique()
	{
		let mut uris = ProblemType::ALL.iter().map(|problem| problem.uri()).collect::<Vec<_>>();
		uris.sort_unstable();
		uris.dedup();

		assert_eq!(uris.len(), ProblemType::ALL.len());
	}

	#[test]
	fn only_server_side_problems_are_5xx()
	{
		for &problem in ProblemType::ALL {
			let is_server_side =
				matches!(problem, ProblemType::StorageUnavailable | ProblemType::InternalServerError);

			assert_eq!(problem.status().is_server_error(), is_server_side, "{problem:?}");
		}
	}
}
