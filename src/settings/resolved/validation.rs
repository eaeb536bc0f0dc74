use coursefind::web::theme::is_hex_color;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let page = &config.page;

	if page.result_limit == 0 {
		return Err(ConfigError::invalid(
			"ui.result_limit",
			page.result_limit.to_string(),
			sources.source_for_result_limit(),
			"must be greater than zero",
		));
	}

	if page.thumbnail_size == 0 {
		return Err(ConfigError::invalid(
			"ui.thumbnail_size",
			page.thumbnail_size.to_string(),
			sources.source_for_thumbnail_size(),
			"must be at least 1",
		));
	}

	if !is_hex_color(&page.theme.home_background) {
		return Err(ConfigError::invalid(
			"ui.home_background",
			page.theme.home_background.clone(),
			sources.source_for_home_background(),
			"expected a #RRGGBB colour",
		));
	}

	if !is_hex_color(&page.theme.detail_background) {
		return Err(ConfigError::invalid(
			"ui.detail_background",
			page.theme.detail_background.clone(),
			sources.source_for_detail_background(),
			"expected a #RRGGBB colour",
		));
	}

	Ok(())
}
