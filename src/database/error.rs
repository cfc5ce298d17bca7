use {
	derive_more::{Debug, Display, Error, From},
	std::error::Error as StdError,
};

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// An error returned by the database
#[derive(Debug, Display, Error, From)]
#[display("database error: {_0}")]
pub struct DatabaseError(sqlx::Error);

impl DatabaseError
{
	/// Constructs a [`DatabaseError`] for a stored value that could not be turned into its
	/// domain type.
	pub(crate) fn decode_column(
		column: impl Into<String>,
		error: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self
	{
		Self(sqlx::Error::ColumnDecode { index: column.into(), source: error.into() })
	}

	/// Returns whether the error happened before a query could reach the database.
	pub fn is_pool_error(&self) -> bool
	{
		matches!(self.0, sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed)
	}
}
