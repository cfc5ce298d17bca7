use {
	serde::Deserialize,
	std::path::{Path, PathBuf},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct TracingConfig
{
	/// Record request and response headers on HTTP spans.
	pub include_http_headers: bool,
	pub stderr: StderrConfig,
	pub files: FilesConfig,

	#[cfg(target_os = "linux")]
	pub journald: JournaldConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct StderrConfig
{
	pub enable: bool,
	pub ansi: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FilesConfig
{
	pub enable: bool,

	#[serde(default = "default_files_directory")]
	pub directory: Box<Path>,
}

#[cfg(target_os = "linux")]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct JournaldConfig
{
	pub enable: bool,
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self { enable: false, directory: default_files_directory() }
	}
}

fn default_files_directory() -> Box<Path>
{
	PathBuf::from("/var/log/marks-api").into_boxed_path()
}
