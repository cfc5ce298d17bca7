use {
	super::{CourseName, Mark, NewStudent, Student, StudentId, StudentName, StudentStore, StudentUpdate},
	crate::database::{ConnectionPool, DatabaseError, DatabaseResult},
	futures_util::TryFutureExt,
	std::str::FromStr,
	tracing::instrument,
};

/// A [`StudentStore`] backed by the `students` table.
///
/// The table must already exist; `database/schema.sql` creates it.
#[derive(Debug, Clone)]
pub struct PgStudentStore
{
	pool: ConnectionPool,
}

#[derive(sqlx::FromRow)]
struct StudentRow
{
	id: StudentId,
	name: String,
	course: String,
	mark: Option<i32>,
}

impl TryFrom<StudentRow> for Student
{
	type Error = DatabaseError;

	fn try_from(row: StudentRow) -> Result<Self, Self::Error>
	{
		Ok(Self {
			id: row.id,
			name: StudentName::from_str(&row.name)
				.map_err(|error| DatabaseError::decode_column("name", error))?,
			course: CourseName::from_str(&row.course)
				.map_err(|error| DatabaseError::decode_column("course", error))?,
			mark: row
				.mark
				.map(Mark::try_from)
				.transpose()
				.map_err(|error| DatabaseError::decode_column("mark", error))?,
		})
	}
}

impl PgStudentStore
{
	pub fn new(pool: ConnectionPool) -> Self
	{
		Self { pool }
	}
}

impl StudentStore for PgStudentStore
{
	#[instrument(level = "debug", skip(self), err)]
	async fn list_all(&self) -> DatabaseResult<Vec<Student>>
	{
		let mut conn = self.pool.get_connection().await?;

		sqlx::query_as::<_, StudentRow>(
			"SELECT id, name, course, mark
			 FROM students
			 ORDER BY id",
		)
		.fetch_all(&mut *conn)
		.map_err(DatabaseError::from)
		.await?
		.into_iter()
		.map(Student::try_from)
		.collect()
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn get_by_id(&self, student_id: StudentId) -> DatabaseResult<Option<Student>>
	{
		let mut conn = self.pool.get_connection().await?;

		sqlx::query_as::<_, StudentRow>(
			"SELECT id, name, course, mark
			 FROM students
			 WHERE id = $1",
		)
		.bind(student_id)
		.fetch_optional(&mut *conn)
		.map_err(DatabaseError::from)
		.await?
		.map(Student::try_from)
		.transpose()
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn insert(&self, student: NewStudent) -> DatabaseResult<Student>
	{
		let mut conn = self.pool.get_connection().await?;

		sqlx::query_as::<_, StudentRow>(
			"INSERT INTO students (name, course, mark)
			 VALUES ($1, $2, $3)
			 RETURNING id, name, course, mark",
		)
		.bind(student.name.as_str())
		.bind(student.course.as_str())
		.bind(student.mark.map(i32::from))
		.fetch_one(&mut *conn)
		.map_err(DatabaseError::from)
		.await
		.and_then(Student::try_from)
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn update(
		&self,
		student_id: StudentId,
		update: StudentUpdate,
	) -> DatabaseResult<Option<Student>>
	{
		let mut conn = self.pool.get_connection().await?;

		sqlx::query_as::<_, StudentRow>(
			"UPDATE students
			 SET name = COALESCE($1, name),
			     course = COALESCE($2, course),
			     mark = COALESCE($3, mark)
			 WHERE id = $4
			 RETURNING id, name, course, mark",
		)
		.bind(update.name.as_ref().map(StudentName::as_str))
		.bind(update.course.as_ref().map(CourseName::as_str))
		.bind(update.mark.map(i32::from))
		.bind(student_id)
		.fetch_optional(&mut *conn)
		.map_err(DatabaseError::from)
		.await?
		.map(Student::try_from)
		.transpose()
	}

	#[instrument(level = "debug", skip(self), ret(level = "debug"), err)]
	async fn delete(&self, student_id: StudentId) -> DatabaseResult<Option<Student>>
	{
		let mut conn = self.pool.get_connection().await?;

		sqlx::query_as::<_, StudentRow>(
			"DELETE FROM students
			 WHERE id = $1
			 RETURNING id, name, course, mark",
		)
		.bind(student_id)
		.fetch_optional(&mut *conn)
		.map_err(DatabaseError::from)
		.await?
		.map(Student::try_from)
		.transpose()
	}
}

#[cfg(test)]
mod tests
{
	use {super::*, sqlx::PgPool};

	const SCHEMA: &str = include_str!("../../database/schema.sql");

	async fn store(pool: PgPool) -> color_eyre::Result<PgStudentStore>
	{
		sqlx::raw_sql(SCHEMA).execute(&pool).await?;

		Ok(PgStudentStore::new(ConnectionPool::from(pool)))
	}

	fn new_student(name: &str, mark: Option<i32>) -> color_eyre::Result<NewStudent>
	{
		Ok(NewStudent {
			name: name.parse()?,
			course: "COMP3900".parse()?,
			mark: mark.map(Mark::try_from).transpose()?,
		})
	}

	#[sqlx::test(migrations = false)]
	#[ignore = "needs a Postgres server at DATABASE_URL"]
	async fn inserted_students_are_listed_in_order(pool: PgPool) -> color_eyre::Result<()>
	{
		let store = store(pool).await?;
		let alice = store.insert(new_student("Alice", Some(75))?).await?;
		let bob = store.insert(new_student("Bob", None)?).await?;

		assert!(alice.id < bob.id);
		assert_eq!(bob.mark, None);
		assert_eq!(store.list_all().await?, [alice.clone(), bob]);
		assert_eq!(store.get_by_id(alice.id).await?, Some(alice));

		Ok(())
	}

	#[sqlx::test(migrations = false)]
	#[ignore = "needs a Postgres server at DATABASE_URL"]
	async fn update_keeps_unspecified_columns(pool: PgPool) -> color_eyre::Result<()>
	{
		let store = store(pool).await?;
		let alice = store.insert(new_student("Alice", Some(75))?).await?;

		let update = StudentUpdate { course: Some("COMP6080".parse()?), ..StudentUpdate::default() };
		let updated = store.update(alice.id, update).await?;

		assert_eq!(updated, Some(Student { course: "COMP6080".parse()?, ..alice.clone() }));
		assert_eq!(store.get_by_id(alice.id).await?, updated);
		assert_eq!(store.update(StudentId::new(alice.id.get() + 1), StudentUpdate::default()).await?, None);

		Ok(())
	}

	#[sqlx::test(migrations = false)]
	#[ignore = "needs a Postgres server at DATABASE_URL"]
	async fn deleting_twice(pool: PgPool) -> color_eyre::Result<()>
	{
		let store = store(pool).await?;
		let alice = store.insert(new_student("Alice", None)?).await?;

		assert_eq!(store.delete(alice.id).await?, Some(alice.clone()));
		assert_eq!(store.delete(alice.id).await?, None);
		assert_eq!(store.get_by_id(alice.id).await?, None);
		assert!(store.list_all().await?.is_empty());

		Ok(())
	}

	#[sqlx::test(migrations = false)]
	#[ignore = "needs a Postgres server at DATABASE_URL"]
	async fn stored_marks_out_of_range_are_decode_errors(pool: PgPool) -> color_eyre::Result<()>
	{
		sqlx::raw_sql(SCHEMA).execute(&pool).await?;

		let student_id = sqlx::query_scalar::<_, StudentId>(
			"INSERT INTO students (name, course, mark)
			 VALUES ('Dave', 'COMP3900', 150)
			 RETURNING id",
		)
		.fetch_one(&pool)
		.await?;

		let store = PgStudentStore::new(ConnectionPool::from(pool));

		let Err(error) = store.get_by_id(student_id).await else {
			panic!("a mark of 150 should not decode");
		};

		assert!(error.to_string().contains("mark"), "{error}");
		assert!(!error.is_pool_error());
		assert!(store.list_all().await.is_err());

		Ok(())
	}
}
