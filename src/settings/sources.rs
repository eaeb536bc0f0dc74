use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use coursefind::app_dirs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("coursefind")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Every file `build_config` reads for `cli`, in precedence order.
pub(super) fn consulted_files(cli: &CliArgs) -> Vec<PathBuf> {
	let mut files = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	files.extend(cli.config.iter().cloned());
	files
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".coursefind.toml"));
		files.push(current_dir.join("coursefind.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".coursefind.toml")));
		assert!(files.iter().any(|path| path.ends_with("coursefind.toml")));
	}

	#[test]
	fn explicit_files_are_merged() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[ui]\ntitle = \"From file\"\nresult_limit = 4\n").unwrap();

		let cli = CliArgs::parse_from(["coursefind", "--no-config", "-c", path.to_str().unwrap()]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_string("ui.title").unwrap(), "From file");
		assert_eq!(config.get_int("ui.result_limit").unwrap(), 4);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"coursefind",
			"--no-config",
			"-c",
			"/definitely/not/here/coursefind.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
