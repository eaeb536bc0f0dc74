use std::path::PathBuf;

use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, consulted_files};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and
/// `COURSEFIND__*` environment variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let files = consulted_files(cli);
	let builder = build_config(cli).with_context(|| {
		format!("failed to read configuration (files: {})", describe(&files))
	})?;
	let mut raw: RawConfig = builder.try_deserialize().with_context(|| {
		format!(
			"failed to parse configuration from {} or COURSEFIND__* variables",
			describe(&files)
		)
	})?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

fn describe(files: &[PathBuf]) -> String {
	if files.is_empty() {
		return "none".to_string();
	}
	files
		.iter()
		.map(|path| path.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn missing_explicit_file_is_named() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["coursefind", "--no-config", "-c", path.to_str().unwrap()]);

		let err = load(&cli).unwrap_err();
		assert!(format!("{err:#}").contains("absent.toml"));
	}

	#[test]
	fn bad_value_type_is_reported_with_files() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("bad.toml");
		fs::write(&path, "[ui]\nthumbnail_size = \"huge\"\n").unwrap();
		let cli = CliArgs::parse_from(["coursefind", "--no-config", "-c", path.to_str().unwrap()]);

		let err = load(&cli).unwrap_err();
		let message = format!("{err:#}");
		assert!(message.contains("failed to parse configuration"));
		assert!(message.contains("bad.toml"));
	}

	#[test]
	fn describe_lists_paths() {
		assert_eq!(describe(&[]), "none");
		assert_eq!(
			describe(&[PathBuf::from("a.toml"), PathBuf::from("b.toml")]),
			"a.toml, b.toml"
		);
	}
}
