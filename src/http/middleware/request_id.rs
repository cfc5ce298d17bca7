use {
	std::error::Error,
	tower_http::request_id::{
		MakeRequestId,
		PropagateRequestIdLayer,
		RequestId,
		SetRequestIdLayer,
	},
	ulid::Ulid,
};

/// Returns the layers that make sure every request and response carries an `x-request-id`
/// header.
///
/// IDs supplied by the client are kept as-is.
pub(crate) fn layers() -> (SetRequestIdLayer<MakeUlidRequestId>, PropagateRequestIdLayer)
{
	(SetRequestIdLayer::x_request_id(MakeUlidRequestId), PropagateRequestIdLayer::x_request_id())
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeUlidRequestId;

impl MakeRequestId for MakeUlidRequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Ulid::new()
			.to_string()
			.parse::<http::HeaderValue>()
			.inspect_err(|error| {
				tracing::warn!(error = error as &dyn Error, "failed to generate request ID");
			})
			.map(RequestId::new)
			.ok()
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn request_ids_are_ulids() -> color_eyre::Result<()>
	{
		let request = http::Request::new(());
		let request_id = MakeUlidRequestId
			.make_request_id(&request)
			.ok_or_else(|| color_eyre::eyre::eyre!("no request ID"))?;

		let ulid = request_id.header_value().to_str()?.parse::<Ulid>()?;

		assert_eq!(ulid.to_string(), request_id.header_value().to_str()?);

		Ok(())
	}
}
