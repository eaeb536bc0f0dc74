use coursefind_core::View;

pub const HOME_BACKGROUND: &str = "#AA7CA7";
pub const DETAIL_BACKGROUND: &str = "#F28D8C";

/// Page colours, one per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
	pub home_background: String,
	pub detail_background: String,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			home_background: HOME_BACKGROUND.to_string(),
			detail_background: DETAIL_BACKGROUND.to_string(),
		}
	}
}

impl Theme {
	pub fn background_for(&self, view: View<'_>) -> &str {
		match view {
			View::Home => &self.home_background,
			View::CategoryDetail(_) => &self.detail_background,
		}
	}
}

/// Accepts `#RRGGBB` colours only.
pub fn is_hex_color(value: &str) -> bool {
	value.len() == 7
		&& value.starts_with('#')
		&& value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
