use {
	crate::http::problem_details::{ProblemDetails, ProblemType},
	axum::{
		extract::rejection::BytesRejection,
		response::{IntoResponse, Response},
	},
	derive_more::{Debug, Display, From},
	serde_json::error::Category,
};

/// Why a request body could not be turned into a [`Json`](super::Json) value.
#[derive(Debug, Display, From)]
pub(crate) enum JsonRejection
{
	#[display("request body is not JSON (`Content-Type: {}`)", found.as_deref().unwrap_or("<none>"))]
	#[from(ignore)]
	ContentType
	{
		/// The `Content-Type` the request did carry, if any.
		found: Option<String>,
	},

	#[display("failed to buffer request body: {_0}")]
	Body(BytesRejection),

	#[display("failed to deserialize request body: {_0}")]
	Deserialize(serde_json::Error),
}

impl JsonRejection
{
	pub(super) fn content_type(headers: &http::HeaderMap) -> Self
	{
		let found = headers
			.get(http::header::CONTENT_TYPE)
			.map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

		Self::ContentType { found }
	}
}

fn deserialize_problem(error: &serde_json::Error) -> ProblemDetails
{
	let mut problem_details = ProblemDetails::new(ProblemType::DeserializeRequestBody);

	match error.classify() {
		Category::Syntax => problem_details.set_detail("request body is not valid JSON"),
		Category::Eof => problem_details.set_detail("request body ended in the middle of a value"),
		Category::Io => problem_details.set_detail("failed to read request body"),
		Category::Data => {
			problem_details.set_detail(format!("request body has an unexpected shape: {error}"));
		},
	}

	if error.line() > 0 {
		problem_details.add_extension_member("line", &error.line());
		problem_details.add_extension_member("column", &error.column());
	}

	problem_details
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		match self {
			Self::ContentType { found } => {
				let mut problem_details = ProblemDetails::new(ProblemType::MissingHeader);

				problem_details.set_detail(match found {
					None => String::from("expected `Content-Type: application/json`"),
					Some(found) => format!("expected `Content-Type: application/json`, got `{found}`"),
				});
				problem_details
					.add_extension_member("required_header", http::header::CONTENT_TYPE.as_str());
				problem_details.into_response()
			},
			Self::Body(rejection) => rejection.into_response(),
			Self::Deserialize(error) => deserialize_problem(&error).into_response(),
		}
	}
}
