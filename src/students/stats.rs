use {
	super::Mark,
	serde::{Serialize, Serializer, ser::SerializeMap},
	utoipa::ToSchema,
};

/// Summary of every mark currently on record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct MarkStats
{
	/// How many students have a mark.
	pub count: u64,

	/// The arithmetic mean of all marks.
	pub average: f64,

	pub min: Mark,
	pub max: Mark,
}

impl MarkStats
{
	/// Computes stats over `marks` in a single pass.
	///
	/// Returns [`None`] if there are no marks.
	pub fn from_marks(marks: impl IntoIterator<Item = Mark>) -> Option<Self>
	{
		let mut marks = marks.into_iter();
		let first = marks.next()?;

		let (count, sum, min, max) = marks.fold(
			(1_u64, u64::from(first.get()), first, first),
			|(count, sum, min, max), mark| {
				(count + 1, sum + u64::from(mark.get()), min.min(mark), max.max(mark))
			},
		);

		#[expect(clippy::cast_precision_loss)]
		let average = sum as f64 / count as f64;

		Some(Self { count, average, min, max })
	}
}

/// The response of the stats endpoint.
///
/// Serializes as the contained [`MarkStats`], or as an empty object if there are none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot(pub Option<MarkStats>);

impl Serialize for StatsSnapshot
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self.0 {
			Some(ref stats) => stats.serialize(serializer),
			None => serializer.serialize_map(Some(0))?.end(),
		}
	}
}

#[cfg(test)]
mod tests
{
	use {super::*, serde_json::json};

	fn marks(values: &[i32]) -> color_eyre::Result<Vec<Mark>>
	{
		values
			.iter()
			.map(|&value| Mark::try_from(value).map_err(Into::into))
			.collect()
	}

	#[test]
	fn no_marks_no_stats()
	{
		assert_eq!(MarkStats::from_marks(Vec::new()), None);
	}

	#[test]
	fn single_mark() -> color_eyre::Result<()>
	{
		let stats = MarkStats::from_marks(marks(&[75])?)
			.ok_or_else(|| color_eyre::eyre::eyre!("no stats"))?;

		assert_eq!(stats.count, 1);
		assert!((stats.average - 75.0).abs() < f64::EPSILON);
		assert_eq!(stats.min.get(), 75);
		assert_eq!(stats.max.get(), 75);

		Ok(())
	}

	#[test]
	fn many_marks() -> color_eyre::Result<()>
	{
		let stats = MarkStats::from_marks(marks(&[60, 0, 100, 75, 33])?)
			.ok_or_else(|| color_eyre::eyre::eyre!("no stats"))?;

		assert_eq!(stats.count, 5);
		assert!((stats.average - 53.6).abs() < 1e-9);
		assert_eq!(stats.min, Mark::MIN);
		assert_eq!(stats.max, Mark::MAX);

		Ok(())
	}

	#[test]
	fn average_is_not_rounded() -> color_eyre::Result<()>
	{
		let stats = MarkStats::from_marks(marks(&[1, 2])?)
			.ok_or_else(|| color_eyre::eyre::eyre!("no stats"))?;

		assert!((stats.average - 1.5).abs() < f64::EPSILON);

		Ok(())
	}

	#[test]
	fn empty_snapshot_is_empty_object() -> color_eyre::Result<()>
	{
		assert_eq!(serde_json::to_value(StatsSnapshot(None))?, json!({}));

		Ok(())
	}

	#[test]
	fn snapshot_serializes_stats() -> color_eyre::Result<()>
	{
		let snapshot = StatsSnapshot(MarkStats::from_marks(marks(&[50, 100])?));

		assert_eq!(
			serde_json::to_value(snapshot)?,
			json!({ "count": 2, "average": 75.0, "min": 50, "max": 100 }),
		);

		Ok(())
	}
}
