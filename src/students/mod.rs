//! Student records and everything needed to store and summarize them.

pub use self::{
	id::StudentId,
	mark::{InvalidMark, Mark},
	memory::MemoryStudentStore,
	payload::{InvalidField, NewStudent, StudentPayload, StudentUpdate, ValidationError},
	postgres::PgStudentStore,
	stats::{MarkStats, StatsSnapshot},
	store::StudentStore,
	text::{CourseName, InvalidText, StudentName},
};
use {serde::Serialize, utoipa::ToSchema};

mod id;
mod mark;
mod memory;
mod payload;
mod postgres;
mod stats;
mod store;
mod text;

/// A student and the mark they received, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Student
{
	pub id: StudentId,
	pub name: StudentName,
	pub course: CourseName,
	pub mark: Option<Mark>,
}
