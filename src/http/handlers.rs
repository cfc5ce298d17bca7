use {
	crate::{
		http::{
			extract::Path,
			json::Json,
			openapi,
			problem_details::{ProblemDescription, ProblemDetails, ProblemType},
			response::{HandlerError, HandlerResult},
		},
		students::{
			MarkStats,
			NewStudent,
			StatsSnapshot,
			Student,
			StudentId,
			StudentPayload,
			StudentStore,
			StudentUpdate,
		},
	},
	axum::extract::State,
	serde::Serialize,
	std::sync::{Arc, LazyLock},
	tracing::instrument,
	utoipa::ToSchema,
};

//=================================================================================================
// `/`

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct Health
{
	#[schema(example = "ok")]
	status: &'static str,
}

/// Liveness check
#[instrument(level = "trace")]
#[utoipa::path(get, path = "/", tag = "Health", responses((status = 200, body = Health)))]
pub(crate) async fn health() -> Json<Health>
{
	Json(Health { status: "ok" })
}

//=================================================================================================
// `/docs` & `/problems`

#[instrument(level = "trace")]
pub(crate) async fn openapi_json() -> Json<&'static utoipa::openapi::OpenApi>
{
	static SCHEMA: LazyLock<utoipa::openapi::OpenApi> = LazyLock::new(openapi::schema);

	Json(&*SCHEMA)
}

#[instrument(level = "trace")]
pub(crate) async fn problems_json() -> Json<Vec<ProblemDescription>>
{
	Json(ProblemType::ALL.iter().copied().map(ProblemType::description).collect())
}

//=================================================================================================
// `/students`

/// All students
///
/// Returns every student, ordered by ID.
#[instrument(skip(store), err(Debug, level = "debug"))]
#[utoipa::path(
	get,
	path = "/students",
	tag = "Students",
	responses(
		(status = 200, body = [Student]),
		(status = 503, body = ProblemDetails, description = "the database is unreachable"),
	),
)]
pub(crate) async fn get_students<S>(State(store): State<Arc<S>>) -> HandlerResult<Json<Vec<Student>>>
where
	S: StudentStore,
{
	let students = store.list_all().await?;

	Ok(Json(students))
}

/// Create a student
///
/// `name` and `course` are required; `mark` may be omitted or `null`.
#[instrument(skip(store), ret(level = "debug"), err(Debug, level = "debug"))]
#[utoipa::path(
	post,
	path = "/students",
	tag = "Students",
	request_body = StudentPayload,
	responses(
		(status = 200, body = Student),
		(status = 400, body = ProblemDetails, description = "invalid request body or field"),
	),
)]
pub(crate) async fn create_student<S>(
	State(store): State<Arc<S>>,
	Json(payload): Json<StudentPayload>,
) -> HandlerResult<Json<Student>>
where
	S: StudentStore,
{
	let new_student = NewStudent::try_from(payload)?;
	let student = store.insert(new_student).await?;

	tracing::debug!(id = %student.id, "created student");

	Ok(Json(student))
}

/// Students by ID
#[instrument(skip(store), ret(level = "debug"), err(Debug, level = "debug"))]
#[utoipa::path(
	get,
	path = "/students/{student_id}",
	tag = "Students",
	params(("student_id" = StudentId, Path)),
	responses(
		(status = 200, body = Student),
		(status = 400, body = ProblemDetails, description = "invalid path parameter(s)"),
		(status = 404, body = ProblemDetails),
	),
)]
pub(crate) async fn get_student<S>(
	State(store): State<Arc<S>>,
	Path(student_id): Path<StudentId>,
) -> HandlerResult<Json<Student>>
where
	S: StudentStore,
{
	store
		.get_by_id(student_id)
		.await?
		.map(Json)
		.ok_or(HandlerError::NotFound(student_id))
}

/// Update a student
///
/// Fields that are omitted or `null` keep their current value.
#[instrument(skip(store), ret(level = "debug"), err(Debug, level = "debug"))]
#[utoipa::path(
	put,
	path = "/students/{student_id}",
	tag = "Students",
	params(("student_id" = StudentId, Path)),
	request_body = StudentPayload,
	responses(
		(status = 200, body = Student),
		(status = 400, body = ProblemDetails, description = "invalid path parameter, request body or field"),
		(status = 404, body = ProblemDetails),
	),
)]
pub(crate) async fn update_student<S>(
	State(store): State<Arc<S>>,
	Path(student_id): Path<StudentId>,
	Json(payload): Json<StudentPayload>,
) -> HandlerResult<Json<Student>>
where
	S: StudentStore,
{
	let update = StudentUpdate::try_from(payload)?;

	store
		.update(student_id, update)
		.await?
		.map(Json)
		.ok_or(HandlerError::NotFound(student_id))
}

/// Delete a student
///
/// Returns the student that was deleted.
#[instrument(skip(store), ret(level = "debug"), err(Debug, level = "debug"))]
#[utoipa::path(
	delete,
	path = "/students/{student_id}",
	tag = "Students",
	params(("student_id" = StudentId, Path)),
	responses(
		(status = 200, body = Student),
		(status = 400, body = ProblemDetails, description = "invalid path parameter(s)"),
		(status = 404, body = ProblemDetails),
	),
)]
pub(crate) async fn delete_student<S>(
	State(store): State<Arc<S>>,
	Path(student_id): Path<StudentId>,
) -> HandlerResult<Json<Student>>
where
	S: StudentStore,
{
	let student = store
		.delete(student_id)
		.await?
		.ok_or(HandlerError::NotFound(student_id))?;

	tracing::info!(target: "marks_api::audit_log", id = %student.id, "deleted student");

	Ok(Json(student))
}

//=================================================================================================
// `/stats`

/// Mark statistics
///
/// Summarizes the marks of every student that has one. If nobody has a mark yet, the response
/// is an empty object.
#[instrument(skip(store), ret(level = "debug"), err(Debug, level = "debug"))]
#[utoipa::path(
	get,
	path = "/stats",
	tag = "Stats",
	responses(
		(status = 200, body = MarkStats, description = "stats, or `{}` if there are no marks"),
		(status = 503, body = ProblemDetails, description = "the database is unreachable"),
	),
)]
pub(crate) async fn get_stats<S>(State(store): State<Arc<S>>) -> HandlerResult<Json<StatsSnapshot>>
where
	S: StudentStore,
{
	let students = store.list_all().await?;
	let stats = MarkStats::from_marks(students.iter().filter_map(|student| student.mark));

	Ok(Json(StatsSnapshot(stats)))
}
