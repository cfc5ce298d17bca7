use {
	super::{CourseName, InvalidMark, InvalidText, Mark, StudentName},
	derive_more::{Debug, Display, Error, From},
	serde::{Deserialize, Deserializer},
	serde_json::{Map, Value},
	utoipa::ToSchema,
};

/// Request body for creating or updating a student.
///
/// Values are kept as raw JSON so that validation can report exactly which field was wrong.
/// Unknown fields are ignored; `null` is treated the same as a missing field. Anything but a
/// JSON object is rejected.
#[derive(Debug, Default, ToSchema)]
pub struct StudentPayload
{
	#[schema(value_type = Option<String>, example = "Alice")]
	pub name: Option<Value>,

	#[schema(value_type = Option<String>, example = "COMP3900")]
	pub course: Option<Value>,

	#[schema(value_type = Option<u8>, minimum = 0, maximum = 100, example = 75)]
	pub mark: Option<Value>,
}

impl<'de> Deserialize<'de> for StudentPayload
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let mut object = Map::<String, Value>::deserialize(deserializer)?;
		let mut take = |key: &str| object.remove(key).filter(|value| !value.is_null());

		Ok(Self { name: take("name"), course: take("course"), mark: take("mark") })
	}
}

/// A validated student that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent
{
	pub name: StudentName,
	pub course: CourseName,
	pub mark: Option<Mark>,
}

/// Validated changes to an existing student.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StudentUpdate
{
	pub name: Option<StudentName>,
	pub course: Option<CourseName>,
	pub mark: Option<Mark>,
}

/// A field in a [`StudentPayload`] did not pass validation.
#[derive(Debug, Display, Error)]
#[display("`{field}` {reason}")]
pub struct ValidationError
{
	field: &'static str,

	#[error(source)]
	reason: InvalidField,
}

#[non_exhaustive]
#[derive(Debug, Display, Error, From)]
pub enum InvalidField
{
	#[from(ignore)]
	#[display("is required")]
	Missing,
	Text(InvalidText),
	Mark(InvalidMark),
}

impl ValidationError
{
	/// The name of the offending field, as it appears in the JSON body.
	pub fn field(&self) -> &'static str
	{
		self.field
	}

	pub fn reason(&self) -> &InvalidField
	{
		&self.reason
	}
}

fn required<T, E>(
	field: &'static str,
	value: Option<&Value>,
	parse: impl FnOnce(&Value) -> Result<T, E>,
) -> Result<T, ValidationError>
where
	E: Into<InvalidField>,
{
	let value = value.ok_or(ValidationError { field, reason: InvalidField::Missing })?;

	parse(value).map_err(|error| ValidationError { field, reason: error.into() })
}

fn optional<T, E>(
	field: &'static str,
	value: Option<&Value>,
	parse: impl FnOnce(&Value) -> Result<T, E>,
) -> Result<Option<T>, ValidationError>
where
	E: Into<InvalidField>,
{
	value
		.map(parse)
		.transpose()
		.map_err(|error| ValidationError { field, reason: error.into() })
}

impl TryFrom<StudentPayload> for NewStudent
{
	type Error = ValidationError;

	fn try_from(payload: StudentPayload) -> Result<Self, Self::Error>
	{
		Ok(Self {
			name: required("name", payload.name.as_ref(), StudentName::from_json)?,
			course: required("course", payload.course.as_ref(), CourseName::from_json)?,
			mark: optional("mark", payload.mark.as_ref(), Mark::from_json)?,
		})
	}
}

impl TryFrom<StudentPayload> for StudentUpdate
{
	type Error = ValidationError;

	fn try_from(payload: StudentPayload) -> Result<Self, Self::Error>
	{
		Ok(Self {
			name: optional("name", payload.name.as_ref(), StudentName::from_json)?,
			course: optional("course", payload.course.as_ref(), CourseName::from_json)?,
			mark: optional("mark", payload.mark.as_ref(), Mark::from_json)?,
		})
	}
}

#[cfg(test)]
mod tests
{
	use {super::*, serde_json::json};

	fn payload(value: Value) -> color_eyre::Result<StudentPayload>
	{
		Ok(serde_json::from_value(value)?)
	}

	#[test]
	fn new_student_from_full_payload() -> color_eyre::Result<()>
	{
		let student = NewStudent::try_from(payload(json!({
			"name": " Alice ",
			"course": "COMP3900",
			"mark": 75,
		}))?)?;

		assert_eq!(student.name.as_str(), "Alice");
		assert_eq!(student.course.as_str(), "COMP3900");
		assert_eq!(student.mark.map(Mark::get), Some(75));

		Ok(())
	}

	#[test]
	fn missing_or_null_mark_is_none() -> color_eyre::Result<()>
	{
		let without_mark = NewStudent::try_from(payload(json!({
			"name": "Bob",
			"course": "MATH1131",
		}))?)?;

		let null_mark = NewStudent::try_from(payload(json!({
			"name": "Bob",
			"course": "MATH1131",
			"mark": null,
		}))?)?;

		assert_eq!(without_mark.mark, None);
		assert_eq!(null_mark.mark, None);

		Ok(())
	}

	#[test]
	fn new_student_reports_offending_field() -> color_eyre::Result<()>
	{
		let cases = [
			(json!({ "course": "COMP3900" }), "name"),
			(json!({ "name": "   ", "course": "COMP3900" }), "name"),
			(json!({ "name": "Alice" }), "course"),
			(json!({ "name": "Alice", "course": 3900 }), "course"),
			(json!({ "name": "Alice", "course": "COMP3900", "mark": 101 }), "mark"),
			(json!({ "name": "Alice", "course": "COMP3900", "mark": "A+" }), "mark"),
		];

		for (body, expected_field) in cases {
			let Err(error) = NewStudent::try_from(payload(body.clone())?) else {
				panic!("{body} should be rejected");
			};

			assert_eq!(error.field(), expected_field, "{body}");
		}

		Ok(())
	}

	#[test]
	fn missing_field_message() -> color_eyre::Result<()>
	{
		let Err(error) = NewStudent::try_from(payload(json!({ "name": "Alice" }))?) else {
			panic!("missing course should be rejected");
		};

		assert!(matches!(error.reason(), InvalidField::Missing));
		assert_eq!(error.to_string(), "`course` is required");

		Ok(())
	}

	#[test]
	fn empty_update_changes_nothing() -> color_eyre::Result<()>
	{
		let update = StudentUpdate::try_from(payload(json!({}))?)?;

		assert_eq!(update, StudentUpdate::default());

		Ok(())
	}

	#[test]
	fn update_rejects_supplied_invalid_fields() -> color_eyre::Result<()>
	{
		let Err(error) = StudentUpdate::try_from(payload(json!({ "name": "" }))?) else {
			panic!("empty name should be rejected");
		};

		assert_eq!(error.field(), "name");
		assert!(matches!(error.reason(), InvalidField::Text(InvalidText::Empty)));

		Ok(())
	}

	#[test]
	fn only_objects_are_payloads()
	{
		for body in [json!(["Alice", "COMP3900", 75]), json!([]), json!(null), json!("Alice"), json!(75)] {
			assert!(
				serde_json::from_value::<StudentPayload>(body.clone()).is_err(),
				"{body} should not be a payload",
			);
		}
	}

	#[test]
	fn unknown_fields_are_ignored() -> color_eyre::Result<()>
	{
		let update = StudentUpdate::try_from(payload(json!({ "mark": 50, "grade": "P" }))?)?;

		assert_eq!(update.mark.map(Mark::get), Some(50));
		assert_eq!(update.name, None);

		Ok(())
	}
}
