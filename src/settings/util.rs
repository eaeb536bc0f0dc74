/// Trim a configured string, treating blank values as unset.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Normalize a colour to `#RRGGBB` upper case, adding the `#` when missing.
pub(super) fn normalize_color(value: &str) -> String {
	let trimmed = value.trim();
	let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
	format!("#{}", hex.to_ascii_uppercase())
}
