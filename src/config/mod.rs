//! The `marks-api.toml` configuration file.

use {
	color_eyre::{
		Section,
		eyre::{self, WrapErr},
	},
	serde::Deserialize,
	std::{fs, io, path::Path},
};

pub(crate) use self::{database::DatabaseConfig, http::HttpConfig, tracing::TracingConfig};

mod database;
mod http;
pub(crate) mod tracing;

/// Where the configuration file is looked for if `--config` was not passed.
pub(crate) const DEFAULT_PATH: &str = "marks-api.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config
{
	pub runtime: crate::runtime::RuntimeConfig,
	pub tracing: TracingConfig,
	pub database: DatabaseConfig,
	pub http: HttpConfig,
}

impl Config
{
	/// Loads the configuration file at `path`.
	///
	/// Without an explicit path, [`DEFAULT_PATH`] is tried; if it does not exist, every option
	/// takes its default value.
	pub(crate) fn load(path: Option<&Path>) -> eyre::Result<Self>
	{
		if let Some(path) = path {
			return Self::load_from_file(path);
		}

		match fs::read_to_string(DEFAULT_PATH) {
			Ok(file) => Self::parse(&file),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
			Err(err) => Err(err)
				.wrap_err_with(|| format!("failed to read configuration file at {DEFAULT_PATH:?}")),
		}
	}

	pub(crate) fn load_from_file(path: impl AsRef<Path>) -> eyre::Result<Self>
	{
		let file = fs::read_to_string(path.as_ref())
			.wrap_err_with(|| format!("failed to read configuration file at {:?}", path.as_ref()))
			.suggestion("create the file or run with `--config` to specify an alternative path")?;

		Self::parse(&file)
	}

	fn parse(file: &str) -> eyre::Result<Self>
	{
		toml::from_str(file).wrap_err("failed to parse configuration file")
	}
}

#[cfg(test)]
mod tests
{
	use {super::*, std::net::Ipv4Addr};

	#[test]
	fn empty_file_is_all_defaults() -> eyre::Result<()>
	{
		let config = Config::parse("")?;

		assert_eq!(config.http.socket_addr(), (Ipv4Addr::UNSPECIFIED, 5000).into());
		assert!(config.http.cors.allowed_origins.is_empty());
		assert!(config.database.url.is_none());
		assert!(config.tracing.stderr.enable);

		Ok(())
	}

	#[test]
	fn parses_every_section() -> eyre::Result<()>
	{
		let config = Config::parse(
			r#"
			[runtime]
			worker-threads = 2

			[tracing]
			include-http-headers = true

			[tracing.stderr]
			enable = false

			[database]
			host = "db.internal"
			name = "school"
			max-connections = 5

			[http]
			ip-addr = "127.0.0.1"
			port = 8080
			shutdown-timeout = 2.5

			[http.cors]
			allowed-origins = ["https://marks.example.com/app"]
			"#,
		)?;

		assert_eq!(config.runtime.worker_threads.map(|n| n.get()), Some(2));
		assert!(config.tracing.include_http_headers);
		assert!(!config.tracing.stderr.enable);
		assert_eq!(&*config.database.host, "db.internal");
		assert_eq!(&*config.database.name, "school");
		assert_eq!(config.database.max_connections.map(|n| n.get()), Some(5));
		assert_eq!(config.http.socket_addr(), (Ipv4Addr::LOCALHOST, 8080).into());
		assert_eq!(config.http.shutdown_timeout.as_millis(), 2500);
		assert_eq!(config.http.cors.allowed_origins.len(), 1);
		assert_eq!(config.http.cors.allowed_origins[0], "https://marks.example.com");

		Ok(())
	}

	#[test]
	#[cfg(target_os = "linux")]
	fn example_config_parses() -> eyre::Result<()>
	{
		let config = Config::parse(include_str!("../../marks-api.example.toml"))?;

		assert_eq!(config.http.port, 5000);
		assert_eq!(&*config.database.name, "marks");

		Ok(())
	}

	#[test]
	fn rejects_unknown_fields()
	{
		assert!(Config::parse("[http]\nhost = \"localhost\"").is_err());
	}
}
