use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_CSV: &str = "free_courses_data.csv";
pub(super) const DEFAULT_IMAGES_DIR: &str = "Images";
pub(super) const DEFAULT_LOGO: &str = "analytics_vidhya_logo.jpeg";

/// Where the course table and artwork live, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) csv: Option<PathBuf>,
	pub(super) images_dir: Option<PathBuf>,
	pub(super) logo: Option<PathBuf>,
}

/// Data paths with defaults filled in.
pub(super) struct DataPaths {
	pub(super) csv: PathBuf,
	pub(super) images_dir: PathBuf,
	pub(super) logo: PathBuf,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.csv = Some(path);
		}
		if let Some(dir) = cli.images.clone() {
			self.images_dir = Some(dir);
		}
		if let Some(path) = cli.logo.clone() {
			self.logo = Some(path);
		}
	}

	/// Missing files are not an error here; the page reports them inline.
	pub(super) fn resolve(self) -> DataPaths {
		let images_dir = self
			.images_dir
			.unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR));
		let logo = self.logo.unwrap_or_else(|| images_dir.join(DEFAULT_LOGO));
		DataPaths {
			csv: self.csv.unwrap_or_else(|| PathBuf::from(DEFAULT_CSV)),
			images_dir,
			logo,
		}
	}
}
