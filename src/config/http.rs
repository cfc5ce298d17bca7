use {
	serde::{Deserialize, Deserializer, de},
	std::{
		fmt,
		net::{IpAddr, Ipv4Addr, SocketAddr},
		time::Duration,
	},
	url::Url,
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct HttpConfig
{
	pub ip_addr: IpAddr,
	pub port: u16,

	/// How long in-flight requests may take to finish after a shutdown signal (in seconds).
	#[serde(deserialize_with = "deserialize_duration")]
	pub shutdown_timeout: Duration,

	pub cors: CorsConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct CorsConfig
{
	/// An empty list allows any origin.
	#[serde(deserialize_with = "deserialize_allowed_origins")]
	pub allowed_origins: Box<[http::HeaderValue]>,
}

impl HttpConfig
{
	pub(crate) fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip_addr, self.port)
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			ip_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
			port: 5000,
			shutdown_timeout: Duration::from_secs(10),
			cors: CorsConfig::default(),
		}
	}
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	let secs = f64::deserialize(deserializer)?;

	Duration::try_from_secs_f64(secs).map_err(de::Error::custom)
}

fn deserialize_allowed_origins<'de, D>(
	deserializer: D,
) -> Result<Box<[http::HeaderValue]>, D::Error>
where
	D: Deserializer<'de>,
{
	struct OriginListVisitor;

	impl<'de> de::Visitor<'de> for OriginListVisitor
	{
		type Value = Box<[http::HeaderValue]>;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("a list of CORS origins")
		}

		fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
		where
			A: de::SeqAccess<'de>,
		{
			let size_hint = seq.size_hint().unwrap_or_default();
			let mut header_values = Vec::with_capacity(size_hint);

			while let Some(url) = seq.next_element::<Url>()? {
				let origin = url.origin();

				if !origin.is_tuple() {
					return Err(de::Error::custom(format_args!("{url} has no usable origin")));
				}

				match http::HeaderValue::from_str(&origin.ascii_serialization()) {
					Ok(header_value) => header_values.push(header_value),
					Err(err) => {
						return Err(de::Error::custom(format_args!("invalid CORS origin: {err}")));
					},
				}
			}

			Ok(header_values.into_boxed_slice())
		}
	}

	deserializer.deserialize_seq(OriginListVisitor)
}
