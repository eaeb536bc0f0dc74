//! Free-text search across course names and descriptions.
//!
//! Names and descriptions are lowercased into one candidate pool and handed
//! to a [`Ranker`]. Each ranked text is mapped back to every course whose
//! lowercased name or description equals it, and courses are deduplicated by
//! name with the first occurrence winning.

mod matcher;
mod ranker;

use std::collections::HashSet;

use tracing::debug;

use crate::{Catalog, CourseRecord};

pub use matcher::FrizbeeRanker;
pub use ranker::{RankedCandidate, Ranker};

/// Number of ranked candidates considered per query.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Lowercase and trim a raw query, returning `None` when nothing is left.
pub fn normalize_query(raw: &str) -> Option<String> {
	let normalized = raw.trim().to_lowercase();
	(!normalized.is_empty()).then_some(normalized)
}

/// Courses matched by one query, best candidate first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
	pub query: String,
	pub courses: Vec<&'a CourseRecord>,
}

impl SearchResults<'_> {
	pub fn is_empty(&self) -> bool {
		self.courses.is_empty()
	}

	pub fn len(&self) -> usize {
		self.courses.len()
	}
}

/// Run `raw_query` against `catalog`.
///
/// Returns `None` for a blank query, meaning no search section should be
/// shown at all. `limit` bounds the ranked candidates, not the courses: one
/// candidate text can match several rows.
pub fn search_courses<'a, R: Ranker>(
	catalog: &'a Catalog,
	raw_query: &str,
	ranker: &R,
	limit: usize,
) -> Option<SearchResults<'a>> {
	let query = normalize_query(raw_query)?;

	let names: Vec<String> = catalog
		.courses()
		.iter()
		.map(|course| course.name.to_lowercase())
		.collect();
	let descriptions: Vec<String> = catalog
		.courses()
		.iter()
		.map(|course| course.description.to_lowercase())
		.collect();
	let pool: Vec<&str> = names
		.iter()
		.chain(descriptions.iter())
		.map(String::as_str)
		.collect();

	let ranked = ranker.rank(&query, &pool, limit);

	let mut seen: HashSet<&str> = HashSet::new();
	let mut courses = Vec::new();
	for candidate in &ranked {
		let Some(text) = pool.get(candidate.index) else {
			continue;
		};
		for (row, course) in catalog.courses().iter().enumerate() {
			if names[row] != *text && descriptions[row] != *text {
				continue;
			}
			if seen.insert(course.name.as_str()) {
				courses.push(course);
			}
		}
	}

	debug!(
		query = %query,
		candidates = ranked.len(),
		courses = courses.len(),
		"search complete"
	);
	Some(SearchResults { query, courses })
}
