use {
	derive_more::{Debug, Display},
	serde::{Deserialize, Serialize},
	utoipa::ToSchema,
};

/// The unique ID the database assigns to a student.
#[derive(
	Debug,
	Display,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
	ToSchema,
	sqlx::Type
)]
#[debug("{_0}")]
#[serde(transparent)]
#[sqlx(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct StudentId(i32);

impl StudentId
{
	pub const fn new(value: i32) -> Self
	{
		Self(value)
	}

	pub const fn get(self) -> i32
	{
		self.0
	}
}
