use {
	super::{NewStudent, Student, StudentId, StudentStore, StudentUpdate},
	crate::database::{DatabaseError, DatabaseResult},
	std::collections::BTreeMap,
	tokio::sync::Mutex,
	tracing::instrument,
};

/// A [`StudentStore`] that keeps everything in memory.
///
/// IDs are handed out sequentially starting at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStudentStore
{
	state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State
{
	last_id: i32,
	students: BTreeMap<StudentId, Student>,
}

impl MemoryStudentStore
{
	pub fn new() -> Self
	{
		Self::default()
	}
}

impl StudentStore for MemoryStudentStore
{
	#[instrument(level = "debug", skip(self), err)]
	async fn list_all(&self) -> DatabaseResult<Vec<Student>>
	{
		Ok(self.state.lock().await.students.values().cloned().collect())
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn get_by_id(&self, student_id: StudentId) -> DatabaseResult<Option<Student>>
	{
		Ok(self.state.lock().await.students.get(&student_id).cloned())
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn insert(&self, student: NewStudent) -> DatabaseResult<Student>
	{
		let mut state = self.state.lock().await;

		state.last_id = state.last_id.checked_add(1).ok_or_else(|| {
			DatabaseError::from(sqlx::Error::Protocol(String::from("ran out of student IDs")))
		})?;

		let student = Student {
			id: StudentId::new(state.last_id),
			name: student.name,
			course: student.course,
			mark: student.mark,
		};

		state.students.insert(student.id, student.clone());

		Ok(student)
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn update(
		&self,
		student_id: StudentId,
		update: StudentUpdate,
	) -> DatabaseResult<Option<Student>>
	{
		let mut state = self.state.lock().await;

		let Some(student) = state.students.get_mut(&student_id) else {
			return Ok(None);
		};

		if let Some(name) = update.name {
			student.name = name;
		}

		if let Some(course) = update.course {
			student.course = course;
		}

		if let Some(mark) = update.mark {
			student.mark = Some(mark);
		}

		Ok(Some(student.clone()))
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn delete(&self, student_id: StudentId) -> DatabaseResult<Option<Student>>
	{
		Ok(self.state.lock().await.students.remove(&student_id))
	}
}
