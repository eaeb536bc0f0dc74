use thiserror::Error;

use super::SettingSource;

const ENV_PREFIX: &str = "COURSEFIND";

/// A configuration value that failed validation, with where it came from and
/// the environment variable that can override it.
#[derive(Debug, Error)]
#[error(
	"invalid value for {key} from {origin}: {reason} (value: {value}); override with `{}`",
	env_var_for(.key)
)]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

/// `ui.result_limit` -> `COURSEFIND__UI__RESULT_LIMIT`.
pub(crate) fn env_var_for(key: &str) -> String {
	let mut name = String::from(ENV_PREFIX);
	for part in key.split('.') {
		name.push_str("__");
		name.push_str(&part.to_ascii_uppercase());
	}
	name
}
