//! Database plumbing shared by the SQL-backed stores.

pub use self::{
	error::{DatabaseError, DatabaseResult},
	pool::{ConnectOptions, ConnectionPool},
};

mod error;
mod pool;

/// The database driver used by the API.
pub type Driver = sqlx::Postgres;
