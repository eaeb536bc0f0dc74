use coursefind_core::Catalog;

use super::CourseEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
	pub category: String,
	pub courses: Vec<CourseEntry>,
}

/// Courses of `category` in table order. An unknown category lists nothing.
pub fn build_detail(catalog: &Catalog, category: &str) -> DetailView {
	DetailView {
		category: category.to_string(),
		courses: catalog.in_category(category).map(CourseEntry::from).collect(),
	}
}
