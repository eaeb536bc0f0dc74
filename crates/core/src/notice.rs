use serde::Serialize;
use tracing::warn;

use crate::CatalogError;

/// An inline, user-visible message standing in for an asset that could not
/// be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub message: String,
}

impl Notice {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// Log `err` and convert it into a notice for the page.
	pub fn report(err: &CatalogError) -> Self {
		warn!(error = %err, "asset unavailable");
		Self::from(err)
	}
}

impl From<&CatalogError> for Notice {
	fn from(err: &CatalogError) -> Self {
		Self::new(err.to_string())
	}
}
