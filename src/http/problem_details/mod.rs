//! [RFC 9457] problem details
//!
//! Every error response the API produces has a body of this shape.
//!
//! [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457.html

pub(crate) use self::problem_type::{ProblemDescription, ProblemType};
use {
	axum::response::{IntoResponse, Response},
	serde::ser::{Serialize, SerializeMap, Serializer},
	std::{borrow::Cow, error::Error},
};

mod problem_type;

pub(crate) const CONTENT_TYPE: &str = "application/problem+json";

#[derive(Debug, Clone)]
pub(crate) struct ProblemDetails
{
	problem_type: ProblemType,
	detail: Option<Cow<'static, str>>,
	extension_members: serde_json::Map<String, serde_json::Value>,
}

impl ProblemDetails
{
	pub(crate) fn new(problem_type: ProblemType) -> Self
	{
		Self { problem_type, detail: None, extension_members: serde_json::Map::new() }
	}

	pub(crate) fn problem_type(&self) -> ProblemType
	{
		self.problem_type
	}

	pub(crate) fn detail(&self) -> Option<&str>
	{
		self.detail.as_deref()
	}

	pub(crate) fn set_detail(&mut self, detail: impl Into<Cow<'static, str>>)
	{
		self.detail = Some(detail.into());
	}

	/// Adds an extra member to the response body.
	///
	/// Values that cannot be represented as JSON are logged and dropped.
	pub(crate) fn add_extension_member<V>(&mut self, name: impl Into<String>, value: &V)
	where
		V: ?Sized + Serialize,
	{
		let name = name.into();

		match serde_json::to_value(value) {
			Ok(value) => {
				self.extension_members.insert(name, value);
			},
			Err(error) => {
				tracing::warn!(
					error = &error as &dyn Error,
					name = %name,
					"failed to serialize extension member",
				);
			},
		}
	}
}

impl Serialize for ProblemDetails
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let field_count = 4 // type + status + title + error
			+ usize::from(self.detail.is_some())
			+ self.extension_members.len();

		let mut serializer = serializer.serialize_map(Some(field_count))?;

		serializer.serialize_entry("type", self.problem_type.uri())?;
		serializer.serialize_entry("status", &self.problem_type.status().as_u16())?;
		serializer.serialize_entry("title", self.problem_type.title())?;

		if let Some(detail) = self.detail() {
			serializer.serialize_entry("detail", detail)?;
		}

		// always present; falls back to the title
		serializer
			.serialize_entry("error", self.detail().unwrap_or(self.problem_type.title()))?;

		for (key, value) in &self.extension_members {
			serializer.serialize_entry(key, value)?;
		}

		serializer.end()
	}
}

impl IntoResponse for ProblemDetails
{
	fn into_response(self) -> Response
	{
		let body = match serde_json::to_vec(&self) {
			Ok(body) => body,
			Err(error) => {
				tracing::error!(error = &error as &dyn Error, "failed to serialize problem details");
				return http::StatusCode::INTERNAL_SERVER_ERROR.into_response();
			},
		};

		(
			self.problem_type.status(),
			[(http::header::CONTENT_TYPE, http::HeaderValue::from_static(CONTENT_TYPE))],
			body,
		)
			.into_response()
	}
}

impl utoipa::PartialSchema for ProblemDetails
{
	fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>
	{
		use utoipa::openapi::schema::{AdditionalProperties, Object, Type};

		let problem_types = ProblemType::ALL.iter().map(|problem| problem.uri());

		Object::builder()
			.description(Some("RFC 9457 problem details"))
			.property(
				"type",
				Object::builder().schema_type(Type::String).enum_values(Some(problem_types)),
			)
			.required("type")
			.property("status", Object::with_type(Type::Integer))
			.required("status")
			.property("title", Object::with_type(Type::String))
			.required("title")
			.property("detail", Object::with_type(Type::String))
			.property("error", Object::with_type(Type::String))
			.required("error")
			.additional_properties(Some(AdditionalProperties::FreeForm(true)))
			.into()
	}
}

impl utoipa::ToSchema for ProblemDetails
{
	fn name() -> Cow<'static, str>
	{
		Cow::Borrowed("ProblemDetails")
	}
}

#[cfg(test)]
mod tests
{
	use {super::*, serde_json::json};

	#[test]
	fn serializes_standard_members() -> color_eyre::Result<()>
	{
		let mut problem_details = ProblemDetails::new(ProblemType::InvalidField);
		problem_details.set_detail("`mark` must be an integer");
		problem_details.add_extension_member("field", "mark");

		assert_eq!(
			serde_json::to_value(&problem_details)?,
			json!({
				"type": "/problems/invalid-field",
				"status": 400,
				"title": "invalid field value",
				"detail": "`mark` must be an integer",
				"error": "`mark` must be an integer",
				"field": "mark",
			}),
		);

		Ok(())
	}

	#[test]
	fn error_falls_back_to_title() -> color_eyre::Result<()>
	{
		let problem_details = ProblemDetails::new(ProblemType::InternalServerError);
		let value = serde_json::to_value(&problem_details)?;

		assert_eq!(value["error"], value["title"]);
		assert!(value.get("detail").is_none());

		Ok(())
	}

	#[test]
	fn response_has_problem_content_type()
	{
		let response = ProblemDetails::new(ProblemType::StudentNotFound).into_response();

		assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
		assert_eq!(
			response.headers().get(http::header::CONTENT_TYPE),
			Some(&http::HeaderValue::from_static(CONTENT_TYPE)),
		);
	}
}
