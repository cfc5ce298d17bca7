use {
	derive_more::{Debug, Display, Error},
	serde::Serialize,
	std::{str::FromStr, sync::Arc},
	utoipa::ToSchema,
};

/// A student's name.
///
/// Surrounding whitespace is trimmed and the result may not be empty.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[debug("{_0:?}")]
#[serde(transparent)]
#[schema(value_type = String, example = "Alice")]
pub struct StudentName(Arc<str>);

/// The course a student is enrolled in.
///
/// Same rules as [`StudentName`].
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[debug("{_0:?}")]
#[serde(transparent)]
#[schema(value_type = String, example = "COMP3900")]
pub struct CourseName(Arc<str>);

#[non_exhaustive]
#[derive(Debug, Display, Error)]
pub enum InvalidText
{
	#[display("must be a string")]
	NotAString,

	#[display("may not be empty")]
	Empty,
}

fn trimmed(value: &str) -> Result<Arc<str>, InvalidText>
{
	match value.trim() {
		"" => Err(InvalidText::Empty),
		trimmed => Ok(Arc::from(trimmed)),
	}
}

fn trimmed_json(value: &serde_json::Value) -> Result<Arc<str>, InvalidText>
{
	value.as_str().ok_or(InvalidText::NotAString).and_then(trimmed)
}

impl StudentName
{
	pub fn as_str(&self) -> &str
	{
		&self.0
	}

	pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidText>
	{
		trimmed_json(value).map(Self)
	}
}

impl FromStr for StudentName
{
	type Err = InvalidText;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		trimmed(value).map(Self)
	}
}

impl CourseName
{
	pub fn as_str(&self) -> &str
	{
		&self.0
	}

	pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidText>
	{
		trimmed_json(value).map(Self)
	}
}

impl FromStr for CourseName
{
	type Err = InvalidText;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		trimmed(value).map(Self)
	}
}
