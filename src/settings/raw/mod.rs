use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod data;
mod server;
mod ui;

use data::DataSection;
use server::ServerSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	server: ServerSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.server.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			bind: detect_source(
				cli.bind.is_some(),
				self.server.bind.is_some(),
				"COURSEFIND__SERVER__BIND",
				"--bind",
				"server.bind",
			),
			result_limit: detect_source(
				cli.result_limit.is_some(),
				self.ui.result_limit.is_some(),
				"COURSEFIND__UI__RESULT_LIMIT",
				"--result-limit",
				"ui.result_limit",
			),
			thumbnail_size: detect_source(
				cli.thumbnail_size.is_some(),
				self.ui.thumbnail_size.is_some(),
				"COURSEFIND__UI__THUMBNAIL_SIZE",
				"--thumbnail-size",
				"ui.thumbnail_size",
			),
			home_background: detect_source(
				false,
				self.ui.home_background.is_some(),
				"COURSEFIND__UI__HOME_BACKGROUND",
				"",
				"ui.home_background",
			),
			detail_background: detect_source(
				false,
				self.ui.detail_background.is_some(),
				"COURSEFIND__UI__DETAIL_BACKGROUND",
				"",
				"ui.detail_background",
			),
		};

		let data = self.data.resolve();
		let server = self.server.resolve(&sources).map_err(Error::new)?;
		let page = self.ui.finalize(data.images_dir, data.logo);

		let config = ResolvedConfig {
			data: data.csv,
			server,
			page,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
