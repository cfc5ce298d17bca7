use {
	crate::config::Config,
	std::{net::IpAddr, path::PathBuf},
	url::Url,
};

pub(crate) fn args() -> Args
{
	<Args as clap::Parser>::parse()
}

/// Run the marks API
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args
{
	/// Path to the API's configuration file [default: marks-api.toml]
	#[arg(long = "config")]
	pub config_path: Option<PathBuf>,

	/// The IP address the server should listen on
	#[arg(long = "ip")]
	ip_addr: Option<IpAddr>,

	/// The port the server should listen on
	#[arg(long)]
	port: Option<u16>,

	/// Full database connection URL
	#[arg(long, env = "DATABASE_URL", hide_env_values = true)]
	database_url: Option<Url>,

	/// Database host
	#[arg(long, env = "DB_HOST")]
	db_host: Option<String>,

	/// Database port
	#[arg(long, env = "DB_PORT")]
	db_port: Option<u16>,

	/// Database name
	#[arg(long, env = "DB_NAME")]
	db_name: Option<String>,

	/// Database user
	#[arg(long, env = "DB_USER")]
	db_user: Option<String>,

	/// Database password
	#[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
	db_password: Option<String>,
}

impl Args
{
	/// Overrides values from the configuration file with the ones passed on the command line or
	/// through the environment.
	pub(crate) fn apply_to_config(self, config: &mut Config)
	{
		if let Some(ip_addr) = self.ip_addr {
			config.http.ip_addr = ip_addr;
		}

		if let Some(port) = self.port {
			config.http.port = port;
		}

		if let Some(url) = self.database_url {
			config.database.url = Some(url);
		}

		if let Some(host) = self.db_host {
			config.database.host = host.into_boxed_str();
		}

		if let Some(port) = self.db_port {
			config.database.port = port;
		}

		if let Some(name) = self.db_name {
			config.database.name = name.into_boxed_str();
		}

		if let Some(user) = self.db_user {
			config.database.user = user.into_boxed_str();
		}

		if let Some(password) = self.db_password {
			config.database.password = Some(password.into_boxed_str());
		}
	}
}
