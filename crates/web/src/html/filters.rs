//! Template filters.

use std::fmt::Display;

/// Links are only emitted for web and mail schemes; anything else becomes `#`.
pub fn safe_href(link: &str) -> String {
	let trimmed = link.trim();
	let lower = trimmed.to_ascii_lowercase();
	if ["http://", "https://", "mailto:"]
		.iter()
		.any(|scheme| lower.starts_with(scheme))
	{
		trimmed.to_string()
	} else {
		"#".to_string()
	}
}

/// `{{ link|href }}`: [`safe_href`] as a template filter. The result is still
/// escaped by the template.
pub fn href<T: Display>(link: T) -> askama::Result<String> {
	Ok(safe_href(&link.to_string()))
}
