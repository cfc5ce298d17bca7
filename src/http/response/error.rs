use {
	crate::{
		database::DatabaseError,
		http::problem_details::{ProblemDetails, ProblemType},
		students::{StudentId, ValidationError},
	},
	axum::response::{IntoResponse, Response},
	derive_more::Debug,
	std::{error::Error, panic::Location},
};

pub(crate) type HandlerResult<T> = Result<T, HandlerError>;

#[derive(Debug)]
pub(crate) enum HandlerError
{
	NotFound(StudentId),
	Unavailable,
	Internal,

	#[debug("Problem({:?})", _0.problem_type())]
	Problem(ProblemDetails),
}

impl IntoResponse for HandlerError
{
	fn into_response(self) -> Response
	{
		match self {
			HandlerError::NotFound(student_id) => {
				let mut problem_details = ProblemDetails::new(ProblemType::StudentNotFound);
				problem_details.set_detail(format!("no student with ID {student_id}"));
				problem_details.add_extension_member("student_id", &student_id);
				problem_details.into_response()
			},
			HandlerError::Unavailable => {
				ProblemDetails::new(ProblemType::StorageUnavailable).into_response()
			},
			HandlerError::Internal => {
				ProblemDetails::new(ProblemType::InternalServerError).into_response()
			},
			HandlerError::Problem(problem_details) => problem_details.into_response(),
		}
	}
}

impl From<ProblemDetails> for HandlerError
{
	fn from(problem_details: ProblemDetails) -> Self
	{
		Self::Problem(problem_details)
	}
}

impl From<ValidationError> for HandlerError
{
	fn from(error: ValidationError) -> Self
	{
		tracing::debug!(error = &error as &dyn Error, "rejecting invalid payload");

		let mut problem_details = ProblemDetails::new(ProblemType::InvalidField);
		problem_details.set_detail(error.to_string());
		problem_details.add_extension_member("field", error.field());

		Self::Problem(problem_details)
	}
}

impl From<DatabaseError> for HandlerError
{
	#[track_caller]
	fn from(error: DatabaseError) -> Self
	{
		tracing::error!(loc = %Location::caller(), error = &error as &dyn Error);

		if error.is_pool_error() { Self::Unavailable } else { Self::Internal }
	}
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		crate::students::{NewStudent, StudentPayload},
	};

	#[test]
	fn validation_errors_become_bad_requests() -> color_eyre::Result<()>
	{
		let payload = serde_json::from_value::<StudentPayload>(serde_json::json!({
			"name": "Alice",
			"course": "",
		}))?;

		let Err(error) = NewStudent::try_from(payload) else {
			panic!("empty course should be rejected");
		};

		let HandlerError::Problem(problem_details) = HandlerError::from(error) else {
			panic!("validation errors should turn into problem details");
		};

		assert_eq!(problem_details.problem_type(), ProblemType::InvalidField);
		assert_eq!(problem_details.detail(), Some("`course` may not be empty"));

		Ok(())
	}

	#[test]
	fn pool_errors_are_unavailable()
	{
		let response = HandlerError::from(DatabaseError::from(sqlx::Error::PoolTimedOut))
			.into_response();

		assert_eq!(response.status(), http::StatusCode::SERVICE_UNAVAILABLE);
	}

	#[test]
	fn other_database_errors_are_internal()
	{
		let response = HandlerError::from(DatabaseError::from(sqlx::Error::RowNotFound))
			.into_response();

		assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
	}
}
