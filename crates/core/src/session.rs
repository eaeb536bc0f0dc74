//! Per-user selection state and the reducer that advances it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Interaction that changes what a session is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// A category control was clicked.
	Select(String),
	/// The "back to all courses" control was clicked.
	Back,
}

/// Which view the page shows for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
	Home,
	CategoryDetail(&'a str),
}

/// Immutable session value; every interaction produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
	selected: Option<String>,
	clicked: BTreeSet<String>,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Categories clicked at least once in this session.
	pub fn clicked(&self) -> &BTreeSet<String> {
		&self.clicked
	}

	pub fn was_clicked(&self, category: &str) -> bool {
		self.clicked.contains(category)
	}

	/// Apply `event` and return the resulting session.
	#[must_use]
	pub fn apply(&self, event: Event) -> Self {
		match event {
			Event::Select(category) => {
				let mut clicked = self.clicked.clone();
				clicked.insert(category.clone());
				Self {
					selected: Some(category),
					clicked,
				}
			}
			Event::Back => Self::default(),
		}
	}

	pub fn view(&self) -> View<'_> {
		match self.selected.as_deref() {
			Some(category) => View::CategoryDetail(category),
			None => View::Home,
		}
	}
}
