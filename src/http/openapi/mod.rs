//! The API's OpenAPI document, served at `GET /docs/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "marks-api",
		description = "Student records and the marks they received.",
		license(name = "GPL-3.0", url = "https://www.gnu.org/licenses/gpl-3.0.en.html"),
	),
	tags(
		(name = "Health"),
		(name = "Students"),
		(name = "Stats", description = "Aggregates over all recorded marks"),
	),
	components(schemas(
		crate::http::problem_details::ProblemDetails,
		crate::students::Student,
		crate::students::Mark,
		crate::students::StudentPayload,
		crate::students::MarkStats,
	)),
	paths(
		crate::http::handlers::health,

		crate::http::handlers::get_students,
		crate::http::handlers::create_student,
		crate::http::handlers::get_student,
		crate::http::handlers::update_student,
		crate::http::handlers::delete_student,

		crate::http::handlers::get_stats,
	),
)]
struct Schema;

/// Builds the OpenAPI document.
pub(crate) fn schema() -> utoipa::openapi::OpenApi
{
	Schema::openapi()
}
