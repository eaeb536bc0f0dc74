use std::net::SocketAddr;

use coursefind::ServerConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources, SettingSource};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServerSection {
	pub(super) bind: Option<String>,
}

impl ServerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(bind) = cli.bind.clone() {
			self.bind = Some(bind);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ServerConfig, ConfigError> {
		let Some(bind) = self.bind else {
			return Ok(ServerConfig::default());
		};

		let addr = bind.trim().parse::<SocketAddr>().map_err(|err| {
			ConfigError::invalid(
				"server.bind",
				bind.clone(),
				sources
					.bind
					.clone()
					.unwrap_or(SettingSource::ConfigKey("server.bind")),
				err.to_string(),
			)
		})?;
		Ok(ServerConfig { bind: addr })
	}
}
