//! Everything a page shows, resolved ahead of rendering.

mod detail;
mod grid;

use std::path::PathBuf;

use coursefind_core::images::{self, THUMBNAIL_SIZE};
use coursefind_core::{
	Catalog, CourseRecord, DEFAULT_RESULT_LIMIT, Notice, Ranker, Session, View, search_courses,
};
use serde::Serialize;
use tracing::debug;

use crate::Theme;

pub use detail::{DetailView, build_detail};
pub use grid::{CategoryGrid, CategoryTile, Thumbnail, build_grid};

pub const DEFAULT_TITLE: &str = "Analytics Vidhya Free Courses";

/// Page-wide settings that do not change between renders.
#[derive(Debug, Clone)]
pub struct PageSettings {
	pub title: String,
	pub images_dir: PathBuf,
	pub logo: PathBuf,
	pub thumbnail_size: u32,
	pub result_limit: usize,
	pub theme: Theme,
}

impl Default for PageSettings {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			images_dir: PathBuf::from("Images"),
			logo: PathBuf::from("Images/analytics_vidhya_logo.jpeg"),
			thumbnail_size: THUMBNAIL_SIZE,
			result_limit: DEFAULT_RESULT_LIMIT,
			theme: Theme::default(),
		}
	}
}

/// A course as listed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseEntry {
	pub name: String,
	pub link: String,
	pub description: String,
	pub category: String,
}

impl From<&CourseRecord> for CourseEntry {
	fn from(course: &CourseRecord) -> Self {
		Self {
			name: course.name.clone(),
			link: course.link.clone(),
			description: course.description.clone(),
			category: course.category.clone(),
		}
	}
}

/// The main area under the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
	Home(CategoryGrid),
	CategoryDetail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
	pub title: String,
	/// `data:` URI of the logo, if it could be loaded.
	pub logo: Option<String>,
	pub background: String,
	/// Page-level notices (missing CSV, missing logo).
	pub notices: Vec<Notice>,
	/// Raw query as typed, echoed back into the search box.
	pub query: String,
	/// `None` when no search was run.
	pub search: Option<Vec<CourseEntry>>,
	pub body: Body,
}

/// Assemble the page for `session` and `query`.
///
/// `load_notice` is the notice produced when the catalog failed to load; it
/// is repeated on every page.
pub fn build_page<R: Ranker>(
	catalog: &Catalog,
	load_notice: Option<&Notice>,
	settings: &PageSettings,
	session: &Session,
	query: &str,
	ranker: &R,
) -> PageView {
	let mut notices: Vec<Notice> = load_notice.cloned().into_iter().collect();

	let logo = match images::encode_inline(&settings.logo) {
		Ok(encoded) => encoded,
		Err(err) => {
			notices.push(Notice::report(&err));
			String::new()
		}
	};
	let logo = (!logo.is_empty()).then(|| images::data_uri(&logo));

	let search = search_courses(catalog, query, ranker, settings.result_limit)
		.map(|results| results.courses.into_iter().map(CourseEntry::from).collect());

	let view = session.view();
	let body = match view {
		View::Home => Body::Home(build_grid(catalog, session, settings)),
		View::CategoryDetail(category) => Body::CategoryDetail(build_detail(catalog, category)),
	};
	debug!(?view, searched = search.is_some(), notices = notices.len(), "page assembled");

	PageView {
		title: settings.title.clone(),
		logo,
		background: settings.theme.background_for(view).to_string(),
		notices,
		query: query.to_string(),
		search,
		body,
	}
}
