use std::path::PathBuf;

use coursefind::web::{PageSettings, Theme};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::util::{non_empty, normalize_color};

/// Page related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) home_background: Option<String>,
	pub(super) detail_background: Option<String>,
	pub(super) thumbnail_size: Option<u32>,
	pub(super) result_limit: Option<usize>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(size) = cli.thumbnail_size {
			self.thumbnail_size = Some(size);
		}
		if let Some(limit) = cli.result_limit {
			self.result_limit = Some(limit);
		}
	}

	pub(super) fn finalize(self, images_dir: PathBuf, logo: PathBuf) -> PageSettings {
		let defaults = PageSettings::default();
		let theme = Theme {
			home_background: self
				.home_background
				.as_deref()
				.map(normalize_color)
				.unwrap_or(defaults.theme.home_background),
			detail_background: self
				.detail_background
				.as_deref()
				.map(normalize_color)
				.unwrap_or(defaults.theme.detail_background),
		};

		PageSettings {
			title: non_empty(self.title).unwrap_or(defaults.title),
			images_dir,
			logo,
			thumbnail_size: self.thumbnail_size.unwrap_or(defaults.thumbnail_size),
			result_limit: self.result_limit.unwrap_or(defaults.result_limit),
			theme,
		}
	}
}
