use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) bind: Option<SettingSource>,
	pub(crate) result_limit: Option<SettingSource>,
	pub(crate) thumbnail_size: Option<SettingSource>,
	pub(crate) home_background: Option<SettingSource>,
	pub(crate) detail_background: Option<SettingSource>,
}

impl ConfigSources {
	fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}

	pub(crate) fn source_for_result_limit(&self) -> SettingSource {
		Self::or_key(&self.result_limit, "ui.result_limit")
	}

	pub(crate) fn source_for_thumbnail_size(&self) -> SettingSource {
		Self::or_key(&self.thumbnail_size, "ui.thumbnail_size")
	}

	pub(crate) fn source_for_home_background(&self) -> SettingSource {
		Self::or_key(&self.home_background, "ui.home_background")
	}

	pub(crate) fn source_for_detail_background(&self) -> SettingSource {
		Self::or_key(&self.detail_background, "ui.detail_background")
	}
}
