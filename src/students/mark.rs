use {
	derive_more::{Debug, Display, Error},
	serde::Serialize,
	std::borrow::Cow,
};

/// A mark between 0 and 100 (inclusive).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[debug("{_0}")]
#[serde(transparent)]
pub struct Mark(u8);

#[non_exhaustive]
#[derive(Debug, Display, Error)]
pub enum InvalidMark
{
	#[display("must be an integer")]
	NotAnInteger,

	#[display("must be between {} and {} (got {value})", Mark::MIN.0, Mark::MAX.0)]
	OutOfRange
	{
		value: i64,
	},
}

impl Mark
{
	pub const MIN: Self = Self(0);
	pub const MAX: Self = Self(100);

	pub const fn get(self) -> u8
	{
		self.0
	}

	/// Parses a mark out of an arbitrary JSON value.
	///
	/// Only JSON integers are accepted; `75.0` and `"75"` are rejected.
	pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidMark>
	{
		value.as_i64().ok_or(InvalidMark::NotAnInteger).and_then(Self::try_from)
	}
}

impl TryFrom<i64> for Mark
{
	type Error = InvalidMark;

	fn try_from(value: i64) -> Result<Self, Self::Error>
	{
		u8::try_from(value)
			.ok()
			.filter(|&mark| mark <= Self::MAX.0)
			.map(Self)
			.ok_or(InvalidMark::OutOfRange { value })
	}
}

impl TryFrom<i32> for Mark
{
	type Error = InvalidMark;

	fn try_from(value: i32) -> Result<Self, Self::Error>
	{
		Self::try_from(i64::from(value))
	}
}

impl From<Mark> for i32
{
	fn from(mark: Mark) -> Self
	{
		i32::from(mark.0)
	}
}

impl utoipa::PartialSchema for Mark
{
	fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>
	{
		use utoipa::openapi::schema::{Object, Type};

		Object::builder()
			.schema_type(Type::Integer)
			.description(Some("A mark between 0 and 100 (inclusive)"))
			.minimum(Some(Self::MIN.0))
			.maximum(Some(Self::MAX.0))
			.examples([75])
			.into()
	}
}

impl utoipa::ToSchema for Mark
{
	fn name() -> Cow<'static, str>
	{
		Cow::Borrowed("Mark")
	}
}
