//! The in-memory course table and the categories derived from it.

mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use loader::{load_catalog, load_or_empty};

/// One row of the course CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
	#[serde(rename = "Category")]
	pub category: String,
	#[serde(rename = "Course Name")]
	pub name: String,
	#[serde(rename = "Link")]
	pub link: String,
	#[serde(rename = "Description")]
	pub description: String,
}

impl CourseRecord {
	pub fn new(
		category: impl Into<String>,
		name: impl Into<String>,
		link: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		Self {
			category: category.into(),
			name: name.into(),
			link: link.into(),
			description: description.into(),
		}
	}
}

/// Read-only course table in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	courses: Vec<CourseRecord>,
}

impl Catalog {
	pub fn new(courses: Vec<CourseRecord>) -> Self {
		Self { courses }
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn courses(&self) -> &[CourseRecord] {
		&self.courses
	}

	pub fn len(&self) -> usize {
		self.courses.len()
	}

	pub fn is_empty(&self) -> bool {
		self.courses.is_empty()
	}

	/// Distinct categories in the order they first appear in the table.
	pub fn categories(&self) -> Vec<&str> {
		let mut seen = HashSet::new();
		self.courses
			.iter()
			.map(|course| course.category.as_str())
			.filter(|category| seen.insert(*category))
			.collect()
	}

	pub fn has_category(&self, category: &str) -> bool {
		self.courses.iter().any(|course| course.category == category)
	}

	/// Rows whose category equals `category` exactly, in table order.
	pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CourseRecord> {
		self.courses
			.iter()
			.filter(move |course| course.category == category)
	}
}

impl FromIterator<CourseRecord> for Catalog {
	fn from_iter<I: IntoIterator<Item = CourseRecord>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
