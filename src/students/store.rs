use {
	super::{NewStudent, Student, StudentId, StudentUpdate},
	crate::database::DatabaseResult,
};

/// Persistent storage for [`Student`]s.
///
/// Every method performs a single operation against the backing store; conflicting writes are
/// serialized by the store itself.
pub trait StudentStore: Send + Sync + 'static
{
	/// Returns every student, ordered by ID.
	fn list_all(&self) -> impl Future<Output = DatabaseResult<Vec<Student>>> + Send;

	fn get_by_id(
		&self,
		student_id: StudentId,
	) -> impl Future<Output = DatabaseResult<Option<Student>>> + Send;

	/// Stores a new student and returns it with its freshly assigned ID.
	fn insert(&self, student: NewStudent) -> impl Future<Output = DatabaseResult<Student>> + Send;

	/// Applies `update` to an existing student.
	///
	/// Returns [`None`] if there is no student with the given ID.
	fn update(
		&self,
		student_id: StudentId,
		update: StudentUpdate,
	) -> impl Future<Output = DatabaseResult<Option<Student>>> + Send;

	/// Deletes a student and returns what was deleted.
	///
	/// Returns [`None`] if there is no student with the given ID.
	fn delete(
		&self,
		student_id: StudentId,
	) -> impl Future<Output = DatabaseResult<Option<Student>>> + Send;
}
